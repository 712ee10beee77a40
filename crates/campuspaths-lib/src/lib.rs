//! Campus Paths library entry points.
//!
//! This crate loads the campus building and walkway datasets, builds the
//! weighted walkway graph, and answers shortest-path queries between named
//! buildings. Higher-level consumers (CLI, HTTP service) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod dataset;
pub mod directions;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod search;

pub use campus::{Building, CampusMap, Point};
pub use dataset::{load_buildings, load_campus, load_walkways, DatasetPaths, Walkway};
pub use directions::{direction_between, Direction};
pub use error::{Error, Result};
pub use graph::{Edge, WeightedGraph};
pub use output::{segment_views, RouteEndpoint, RouteSummary, SegmentView};
pub use path::{Path, Segment};
pub use search::find_path;
