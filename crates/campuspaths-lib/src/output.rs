use std::fmt::Write;

use serde::Serialize;

use crate::campus::{CampusMap, Point};
use crate::directions::direction_between;
use crate::error::Result;
use crate::path::Path;

/// Building at either end of a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl RouteEndpoint {
    fn resolve(map: &CampusMap, short_name: &str) -> Result<Self> {
        let long_name = map.long_name_for(short_name)?.to_string();
        let point = map.point_for(short_name)?;
        Ok(Self {
            short_name: short_name.to_string(),
            long_name,
            x: point.x,
            y: point.y,
        })
    }
}

/// Single walkway hop in the shape served by the `/findPath` endpoint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SegmentView {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

impl SegmentView {
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Structured representation of a walking route that the CLI and the HTTP
/// service can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub end: RouteEndpoint,
    pub total_distance: f64,
    pub segments: Vec<SegmentView>,
    /// One compass label per segment, in walking order.
    pub directions: Vec<String>,
}

impl RouteSummary {
    /// Build a summary for `path`, resolving the endpoint names through `map`.
    pub fn from_path(
        map: &CampusMap,
        start: &str,
        end: &str,
        path: &Path<Point>,
    ) -> Result<Self> {
        let segments = segment_views(path);
        let directions = segments
            .iter()
            .map(|segment| direction_between(&segment.start(), &segment.end()).to_string())
            .collect();

        Ok(Self {
            start: RouteEndpoint::resolve(map, start)?,
            end: RouteEndpoint::resolve(map, end)?,
            total_distance: path.cost(),
            segments,
            directions,
        })
    }

    pub fn hops(&self) -> usize {
        self.segments.len()
    }

    /// Plain-text walking instructions.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path from {} to {}:",
            self.start.long_name, self.end.long_name
        );

        for (segment, direction) in self.segments.iter().zip(&self.directions) {
            let heading = if direction.is_empty() {
                String::new()
            } else {
                format!(" {direction}")
            };
            let _ = writeln!(
                buffer,
                "\tWalk {:.0} feet{} to {}",
                segment.distance,
                heading,
                segment.end()
            );
        }

        let _ = writeln!(buffer, "Total distance: {:.0} feet", self.total_distance);
        buffer
    }
}

/// Flatten a path into its segment views, origin first.
pub fn segment_views(path: &Path<Point>) -> Vec<SegmentView> {
    path.segments()
        .into_iter()
        .map(|segment| SegmentView {
            x1: segment.start.x,
            y1: segment.start.y,
            x2: segment.end.x,
            y2: segment.end.y,
            distance: segment.cost,
        })
        .collect()
}
