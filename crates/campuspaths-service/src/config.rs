//! Service configuration read from the environment.
//!
//! - `SERVICE_PORT`: listen port (default 4567)
//! - `METRICS_ENABLED`, `METRICS_PATH`: see [`MetricsConfig`]
//! - `CORS_ALLOW_ORIGIN`: see [`CorsConfig`]
//! - `CAMPUSPATHS_DATA_DIR` and the file-name overrides: see [`DatasetPaths::resolve`]

use std::net::SocketAddr;

use campuspaths_lib::DatasetPaths;
use campuspaths_service_shared::{CorsConfig, MetricsConfig};

pub const DEFAULT_PORT: u16 = 4567;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub dataset: DatasetPaths,
    pub metrics: MetricsConfig,
    pub cors: CorsConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("SERVICE_PORT").ok().as_deref()),
            dataset: DatasetPaths::resolve(None),
            metrics: MetricsConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Mount point of the metrics endpoint, if enabled.
    pub fn metrics_path(&self) -> Option<&str> {
        self.metrics.enabled.then_some(self.metrics.path.as_str())
    }
}

/// Unparseable or missing values fall back to [`DEFAULT_PORT`].
pub fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
