//! Fixtures for handler tests, backed by the campus CSVs in `docs/fixtures`.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use campuspaths_lib::DatasetPaths;

use crate::state::AppState;

pub const TEST_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../docs/fixtures");

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fixture file locations, independent of the file-name environment overrides.
pub fn fixture_paths() -> DatasetPaths {
    let dir = PathBuf::from(TEST_FIXTURE_DIR);
    DatasetPaths {
        buildings: dir.join("campus_buildings.csv"),
        walkways: dir.join("campus_paths.csv"),
    }
}

/// Shared state loaded once from the fixture dataset.
///
/// # Panics
///
/// Panics if the fixture files are missing or malformed.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let paths = fixture_paths();
            AppState::load(&paths).unwrap_or_else(|e| {
                panic!("failed to load test fixture from {}: {}", TEST_FIXTURE_DIR, e)
            })
        })
        .clone()
}

/// Short names present in the fixture dataset.
pub mod fixture_buildings {
    /// Paul G. Allen Center for Computer Science, the usual start.
    pub const CSE: &str = "CSE";

    /// Suzzallo Library, two diagonal walkways from CSE.
    pub const SUZ: &str = "SUZ";

    pub const KNE: &str = "KNE";

    /// Husky Union Building. Reachable from CSE, but its only walkway out
    /// is the one-way link from KNE, so nothing leads back.
    pub const HUB: &str = "HUB";

    /// Parrington Hall, which has no walkways at all.
    pub const PAR: &str = "PAR";
}

pub fn test_request_id() -> String {
    format!("test-{}", REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed))
}
