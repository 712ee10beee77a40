//! `buildings` command: list every building on the campus.

use std::io::{self, Write};

use anyhow::{Context, Result};

use campuspaths_lib::CampusMap;

use crate::output::OutputFormat;

/// Print all buildings sorted by long name.
pub fn handle_buildings(map: &CampusMap, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    format
        .render_buildings(&map.buildings(), &mut out)
        .context("failed to write building listing")?;
    out.flush().context("failed to flush output")
}
