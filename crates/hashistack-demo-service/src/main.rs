//! Entry point for the HashiStack demo service.
//!
//! # Configuration
//!
//! - `VAULT_TOKEN` - Token sent to Vault (default: root)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `UPSTREAM_TIMEOUT_SECS` - Per-call upstream timeout (default: 5)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use hashistack_demo_service::app;
use hashistack_demo_service_shared::{AppState, LoggingConfig, ServiceConfig, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("hashistack-demo");
    init_logging(&logging_config)?;

    let config = ServiceConfig::from_env();
    info!(
        port = config.port,
        consul = %config.endpoints.consul_services,
        vault = %config.endpoints.vault_secret,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "starting hashistack demo service"
    );

    let state = AppState::from_config(&config).map_err(|e| {
        error!(error = %e, "failed to initialise application state");
        e
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
