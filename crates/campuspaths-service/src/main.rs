//! Campus Paths HTTP service binary. See the library docs for endpoints and
//! [`ServiceConfig`] for configuration.

use tracing::{error, info, warn};

use campuspaths_service::{build_router, ServiceConfig};
use campuspaths_service_shared::{init_logging, init_metrics, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("campuspaths-service");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();

    if config.metrics.enabled {
        if let Err(e) = init_metrics(&config.metrics) {
            warn!(error = %e, "failed to initialize metrics, continuing without metrics");
        }
    }

    info!(
        buildings = %config.dataset.buildings.display(),
        walkways = %config.dataset.walkways.display(),
        port = config.port,
        "starting campus paths service"
    );

    let state = AppState::load(&config.dataset).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    let app = build_router(state, &config.cors, config.metrics_path());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
