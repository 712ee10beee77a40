#![allow(dead_code)]

use std::path::PathBuf;

use campuspaths_lib::{load_campus, CampusMap, DatasetPaths};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_paths() -> DatasetPaths {
    let dir = fixtures_dir();
    DatasetPaths {
        buildings: dir.join("campus_buildings.csv"),
        walkways: dir.join("campus_paths.csv"),
    }
}

pub fn fixture_campus() -> CampusMap {
    load_campus(&fixture_paths()).expect("fixture campus loads")
}
