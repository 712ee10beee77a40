//! Cross-origin policy for the browser front end.
//!
//! `CORS_ALLOW_ORIGIN` holds a comma-separated list of origins. Unset, empty
//! or `*` allows any origin.

use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref())
    }

    pub fn parse(value: Option<&str>) -> Self {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::default()
        } else {
            Self {
                allowed_origins: Some(origins),
            }
        }
    }
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    match &config.allowed_origins {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(values))
        }
    }
}
