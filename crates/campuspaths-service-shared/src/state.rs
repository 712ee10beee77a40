//! Application state shared by the axum handlers.

use std::sync::Arc;

use campuspaths_lib::{load_campus, CampusMap, DatasetPaths, Error as LibError};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// One of the dataset files does not exist.
    DatasetNotFound(String),

    /// The dataset exists but could not be parsed or validated.
    CampusLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetNotFound(path) => write!(f, "dataset not found: {}", path),
            Self::CampusLoad(e) => write!(f, "failed to load campus map: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CampusLoad(e) => Some(e),
            Self::DatasetNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::DatasetNotFound { path } => Self::DatasetNotFound(path.display().to_string()),
            other => Self::CampusLoad(other),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheap to clone; the campus map sits behind an `Arc` and is never mutated
/// after loading, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    campus: CampusMap,
}

impl AppState {
    /// Load the campus dataset from `paths`.
    pub fn load(paths: &DatasetPaths) -> Result<Self, AppStateError> {
        tracing::info!(
            buildings = %paths.buildings.display(),
            walkways = %paths.walkways.display(),
            "loading campus dataset"
        );
        let campus = load_campus(paths)?;
        tracing::info!(
            buildings = campus.len(),
            points = campus.graph().node_count(),
            walkways = campus.graph().edge_count(),
            "campus map loaded successfully"
        );
        Ok(Self::from_campus(campus))
    }

    /// Wrap an already built campus map.
    pub fn from_campus(campus: CampusMap) -> Self {
        Self {
            inner: Arc::new(AppStateInner { campus }),
        }
    }

    pub fn campus(&self) -> &CampusMap {
        &self.inner.campus
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("building_count", &self.inner.campus.len())
            .field("point_count", &self.inner.campus.graph().node_count())
            .finish()
    }
}
