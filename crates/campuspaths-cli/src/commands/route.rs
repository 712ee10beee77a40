//! `route` command: shortest walk between two buildings.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use campuspaths_lib::{CampusMap, RouteSummary};

use crate::output::OutputFormat;

/// Compute and print the route from `from` to `to`.
///
/// Unknown names and unreachable buildings surface as errors carrying the
/// library's message, including any "did you mean" suggestions.
pub fn handle_route(map: &CampusMap, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let summary = plan(map, from, to)?;
    info!(
        from,
        to,
        segments = summary.hops(),
        distance = summary.total_distance,
        "route planned"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format
        .render_route(&summary, &mut out)
        .context("failed to write route")?;
    out.flush().context("failed to flush output")
}

/// Find the route and wrap it in a summary.
pub fn plan(map: &CampusMap, from: &str, to: &str) -> Result<RouteSummary> {
    let path = map.find_route(from, to)?;
    let summary = RouteSummary::from_path(map, from, to, &path)
        .context("failed to build route summary")?;
    Ok(summary)
}
