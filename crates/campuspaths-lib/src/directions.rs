//! Compass labels for walkway segments.
//!
//! Map coordinates grow rightwards and downwards, so a segment whose `y`
//! increases heads South. Displacements within [`DIRECTION_THRESHOLD`] units
//! on an axis contribute nothing to the label for that axis.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::campus::Point;

/// Minimum displacement along an axis before it counts as movement.
pub const DIRECTION_THRESHOLD: f64 = 5.0;

/// Heading of a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    EastNorth,
    EastSouth,
    WestNorth,
    WestSouth,
    /// Both displacements fall within the threshold.
    Stationary,
}

#[derive(Clone, Copy)]
enum Horizontal {
    East,
    West,
    None,
}

#[derive(Clone, Copy)]
enum Vertical {
    North,
    South,
    None,
}

impl Direction {
    /// Label used in text output and JSON responses.
    ///
    /// The horizontal part always precedes the vertical part; a stationary
    /// segment has an empty label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::EastNorth => "EastNorth",
            Direction::EastSouth => "EastSouth",
            Direction::WestNorth => "WestNorth",
            Direction::WestSouth => "WestSouth",
            Direction::Stationary => "",
        }
    }

    fn from_parts(horizontal: Horizontal, vertical: Vertical) -> Self {
        match (horizontal, vertical) {
            (Horizontal::East, Vertical::North) => Direction::EastNorth,
            (Horizontal::East, Vertical::South) => Direction::EastSouth,
            (Horizontal::East, Vertical::None) => Direction::East,
            (Horizontal::West, Vertical::North) => Direction::WestNorth,
            (Horizontal::West, Vertical::South) => Direction::WestSouth,
            (Horizontal::West, Vertical::None) => Direction::West,
            (Horizontal::None, Vertical::North) => Direction::North,
            (Horizontal::None, Vertical::South) => Direction::South,
            (Horizontal::None, Vertical::None) => Direction::Stationary,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Classify the segment running from `from` to `to`.
pub fn direction_between(from: &Point, to: &Point) -> Direction {
    let horizontal = if to.x > from.x + DIRECTION_THRESHOLD {
        Horizontal::East
    } else if to.x < from.x - DIRECTION_THRESHOLD {
        Horizontal::West
    } else {
        Horizontal::None
    };

    let vertical = if to.y > from.y + DIRECTION_THRESHOLD {
        Vertical::South
    } else if to.y < from.y - DIRECTION_THRESHOLD {
        Vertical::North
    } else {
        Vertical::None
    };

    Direction::from_parts(horizontal, vertical)
}
