//! Campus map: named buildings on top of the walkway graph.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Walkway;
use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::path::Path;
use crate::search::find_path;

/// Maximum number of "did you mean" suggestions attached to unknown names.
const MAX_SUGGESTIONS: usize = 3;

/// Location on the campus map in map pixel coordinates.
///
/// Points compare and hash by the exact bit pattern of their coordinates, so
/// they can key the walkway graph even though they hold floats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

/// A named campus building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Point,
}

/// Immutable campus map that answers building lookups and route queries.
///
/// The walkway graph and the name tables are built once in
/// [`CampusMap::new`] and never modified afterwards, so a map can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    buildings: HashMap<String, Building>,
    graph: WeightedGraph<Point, f64>,
}

impl CampusMap {
    /// Build a campus map from building and walkway records.
    ///
    /// Fails with [`Error::DuplicateLocation`] when two buildings share a
    /// short name and with [`Error::InvalidWeight`] when a walkway distance is
    /// negative.
    pub fn new(
        buildings: impl IntoIterator<Item = Building>,
        walkways: impl IntoIterator<Item = Walkway>,
    ) -> Result<Self> {
        let mut by_name = HashMap::new();
        for building in buildings {
            if by_name.contains_key(&building.short_name) {
                return Err(Error::DuplicateLocation {
                    name: building.short_name,
                });
            }
            by_name.insert(building.short_name.clone(), building);
        }

        let mut graph = WeightedGraph::new();
        for walkway in walkways {
            let from = walkway.start_point();
            let to = walkway.end_point();
            graph.add_node(from);
            graph.add_node(to);
            graph.add_edge(&from, to, walkway.distance)?;
        }

        debug!(
            buildings = by_name.len(),
            points = graph.node_count(),
            walkways = graph.edge_count(),
            "campus map built"
        );

        Ok(Self {
            buildings: by_name,
            graph,
        })
    }

    /// Whether `short_name` names a known building.
    pub fn location_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(short_name)
    }

    /// Long name of the building registered under `short_name`.
    pub fn long_name_for(&self, short_name: &str) -> Result<&str> {
        self.building(short_name).map(|b| b.long_name.as_str())
    }

    /// Coordinates of the building registered under `short_name`.
    pub fn point_for(&self, short_name: &str) -> Result<Point> {
        self.building(short_name).map(|b| b.location)
    }

    /// Snapshot of every short name mapped to its long name.
    pub fn building_names(&self) -> BTreeMap<String, String> {
        self.buildings
            .values()
            .map(|b| (b.short_name.clone(), b.long_name.clone()))
            .collect()
    }

    /// All buildings sorted case-insensitively by long name.
    pub fn buildings(&self) -> Vec<&Building> {
        let mut buildings: Vec<&Building> = self.buildings.values().collect();
        buildings.sort_by(|a, b| {
            a.long_name
                .to_lowercase()
                .cmp(&b.long_name.to_lowercase())
                .then_with(|| a.short_name.cmp(&b.short_name))
        });
        buildings
    }

    /// Number of registered buildings.
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// The underlying walkway graph.
    pub fn graph(&self) -> &WeightedGraph<Point, f64> {
        &self.graph
    }

    /// Shortest walking route between two buildings.
    ///
    /// Both names are resolved before any search runs, so an unknown name
    /// always reports [`Error::UnknownLocation`]. A valid pair with no
    /// connecting walkways reports [`Error::RouteNotFound`].
    pub fn find_route(&self, start: &str, end: &str) -> Result<Path<Point>> {
        let from = self.point_for(start)?;
        let to = self.point_for(end)?;

        let path = find_path(&self.graph, &from, &to).ok_or_else(|| Error::RouteNotFound {
            start: start.to_string(),
            goal: end.to_string(),
        })?;

        debug!(
            start,
            end,
            segments = path.len(),
            distance = path.cost(),
            "route computed"
        );
        Ok(path)
    }

    fn building(&self, short_name: &str) -> Result<&Building> {
        self.buildings
            .get(short_name)
            .ok_or_else(|| Error::UnknownLocation {
                name: short_name.to_string(),
                suggestions: self.fuzzy_matches(short_name, MAX_SUGGESTIONS),
            })
    }

    /// Short names that closely resemble `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .buildings
            .values()
            .map(|b| {
                let short = strsim::jaro_winkler(&needle, &b.short_name.to_lowercase());
                let long = strsim::jaro_winkler(&needle, &b.long_name.to_lowercase());
                (short.max(long), b.short_name.as_str())
            })
            .filter(|(score, _)| *score >= 0.8)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
