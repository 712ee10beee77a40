//! Loading campus building and walkway records from CSV files.
//!
//! The building file carries `shortName,longName,x,y` columns and the walkway
//! file carries `x1,y1,x2,y2,distance` columns. Both files must have a header
//! row; surrounding whitespace in fields is ignored.

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::campus::{Building, CampusMap, Point};
use crate::error::{Error, Result};

/// Environment variable overriding the directory holding the dataset.
pub const DATA_DIR_ENV: &str = "CAMPUSPATHS_DATA_DIR";
/// Environment variable overriding the building file name.
pub const BUILDINGS_FILE_ENV: &str = "CAMPUSPATHS_BUILDINGS_FILE";
/// Environment variable overriding the walkway file name.
pub const PATHS_FILE_ENV: &str = "CAMPUSPATHS_PATHS_FILE";

pub const DEFAULT_BUILDINGS_FILE: &str = "campus_buildings.csv";
pub const DEFAULT_PATHS_FILE: &str = "campus_paths.csv";

/// Directed walkway between two map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Walkway {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

impl Walkway {
    pub fn start_point(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end_point(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

#[derive(Debug, Deserialize)]
struct BuildingRecord {
    #[serde(rename = "shortName")]
    short_name: String,
    #[serde(rename = "longName")]
    long_name: String,
    x: f64,
    y: f64,
}

/// Resolved locations of the two dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub buildings: PathBuf,
    pub walkways: PathBuf,
}

impl DatasetPaths {
    /// Dataset files inside `dir` using the configured file names.
    pub fn in_dir(dir: &Path) -> Self {
        let buildings =
            env::var(BUILDINGS_FILE_ENV).unwrap_or_else(|_| DEFAULT_BUILDINGS_FILE.to_string());
        let walkways = env::var(PATHS_FILE_ENV).unwrap_or_else(|_| DEFAULT_PATHS_FILE.to_string());
        Self {
            buildings: dir.join(buildings),
            walkways: dir.join(walkways),
        }
    }

    /// Resolve the dataset location.
    ///
    /// Precedence: the explicit `data_dir`, then `CAMPUSPATHS_DATA_DIR`, then
    /// the current directory when it already holds the building file, and
    /// finally the platform data directory.
    pub fn resolve(data_dir: Option<&Path>) -> Self {
        if let Some(dir) = data_dir {
            return Self::in_dir(dir);
        }
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            return Self::in_dir(Path::new(&dir));
        }

        let cwd = Self::in_dir(Path::new("."));
        if cwd.buildings.exists() {
            return cwd;
        }

        match ProjectDirs::from("edu", "campuspaths", "campuspaths") {
            Some(dirs) => Self::in_dir(dirs.data_dir()),
            None => cwd,
        }
    }
}

/// Parse building records from CSV.
pub fn load_buildings<R: Read>(reader: R) -> Result<Vec<Building>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut buildings = Vec::new();

    for (index, result) in csv_reader.deserialize::<BuildingRecord>().enumerate() {
        let row = index as u64 + 2;
        let record = result.map_err(|err| Error::CampusDataValidation {
            message: format!("invalid building at row {}: {}", row, err),
        })?;
        if record.short_name.is_empty() {
            return Err(Error::CampusDataValidation {
                message: format!("building at row {} has an empty short name", row),
            });
        }
        ensure_finite("building", row, &[record.x, record.y])?;
        buildings.push(Building {
            short_name: record.short_name,
            long_name: record.long_name,
            location: Point::new(record.x, record.y),
        });
    }

    Ok(buildings)
}

/// Parse walkway records from CSV.
///
/// Rejects rows whose distance is negative or not finite, and rows with a
/// non-finite coordinate.
pub fn load_walkways<R: Read>(reader: R) -> Result<Vec<Walkway>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut walkways = Vec::new();

    for (index, result) in csv_reader.deserialize::<Walkway>().enumerate() {
        let row = index as u64 + 2;
        let walkway = result.map_err(|err| Error::CampusDataValidation {
            message: format!("invalid walkway at row {}: {}", row, err),
        })?;
        ensure_finite(
            "walkway",
            row,
            &[walkway.x1, walkway.y1, walkway.x2, walkway.y2],
        )?;
        if !walkway.distance.is_finite() || walkway.distance < 0.0 {
            return Err(Error::InvalidDistance {
                row,
                distance: walkway.distance,
            });
        }
        walkways.push(walkway);
    }

    Ok(walkways)
}

fn ensure_finite(kind: &str, row: u64, coordinates: &[f64]) -> Result<()> {
    if coordinates.iter().all(|c| c.is_finite()) {
        return Ok(());
    }
    Err(Error::CampusDataValidation {
        message: format!("{} at row {} has a non-finite coordinate", kind, row),
    })
}

/// Load both dataset files and build the campus map.
pub fn load_campus(paths: &DatasetPaths) -> Result<CampusMap> {
    let buildings = load_buildings(open(&paths.buildings)?)?;
    let walkways = load_walkways(open(&paths.walkways)?)?;
    debug!(
        buildings = buildings.len(),
        walkways = walkways.len(),
        "dataset records parsed"
    );

    let map = CampusMap::new(buildings, walkways)?;
    info!(
        buildings = map.len(),
        points = map.graph().node_count(),
        path = %paths.buildings.display(),
        "campus dataset loaded"
    );
    Ok(map)
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(File::open(path)?)
}
