//! Subcommand handlers.
//!
//! `main.rs` parses arguments and dispatches here; every handler receives an
//! already loaded [`CampusMap`](campuspaths_lib::CampusMap).

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use campuspaths_lib::{load_campus, CampusMap, DatasetPaths};

pub mod buildings;
pub mod interactive;
pub mod route;

/// Resolve the dataset location and load the campus map.
pub fn load_campus_map(data_dir: Option<&Path>) -> Result<CampusMap> {
    let paths = DatasetPaths::resolve(data_dir);
    debug!(
        buildings = %paths.buildings.display(),
        walkways = %paths.walkways.display(),
        "resolved dataset paths"
    );
    load_campus(&paths).with_context(|| {
        format!(
            "failed to load campus dataset from {}",
            paths
                .buildings
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .display()
        )
    })
}
