//! Server binary for the Crush Simulator API.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `crushsim-config.yaml` (or defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Build the application state (seeded catalog, empty session store)
//! 4. Serve HTTP until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use crushsim_api::{AppState, ServerConfig};
use crushsim_core::ServiceConfig;
use crushsim_core::config::LoggingConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Config file looked up relative to the working directory.
const CONFIG_PATH: &str = "crushsim-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be
/// installed, or the listener fails.
#[tokio::main]
async fn main() -> Result<(), ServerBinError> {
    // 1. Load configuration. Logging is not up yet, so the source is
    //    reported once it is.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;

    info!("crushsim-server starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        host = %config.server.host,
        port = config.server.port,
        log_level = %config.logging.level,
        "Configuration resolved"
    );

    // 3. Build application state.
    let state = Arc::new(AppState::new());
    info!(objects = state.catalog.len(), "Object catalog seeded");

    // 4. Serve until Ctrl-C.
    let server_config = ServerConfig::from(&config.server);
    crushsim_api::start_server(&server_config, state, shutdown_signal()).await?;

    info!("crushsim-server shutdown complete");
    Ok(())
}

/// Load `crushsim-config.yaml` if present, otherwise defaults. Environment
/// overrides apply in both cases.
fn load_config() -> Result<(ServiceConfig, bool), ServerBinError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((ServiceConfig::from_file(config_path)?, true))
    } else {
        Ok((ServiceConfig::from_env(), false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), ServerBinError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ServerBinError::Logging {
        message: format!("{e}"),
    })
}

/// Resolve when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => {
            warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
        }
    }
}
