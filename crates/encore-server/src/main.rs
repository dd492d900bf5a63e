//! Booking API server binary for the Encore platform.
//!
//! This is the main entry point that wires together configuration, the
//! `PostgreSQL` pool, migrations, and the HTTP server. It loads
//! configuration, initializes all subsystems, and serves requests until
//! the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `encore.yaml` (env overrides applied)
//! 3. Connect the `PostgreSQL` pool
//! 4. Run pending database migrations
//! 5. Build the shared application state
//! 6. Serve the booking API

mod config;

use std::path::Path;
use std::sync::Arc;

use encore_api::{start_server, AppState, ServerConfig};
use encore_db::{PostgresConfig, PostgresPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Default configuration file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "encore.yaml";

/// Application entry point for the booking API server.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("encore-server starting");

    // 2. Load configuration (missing file falls back to defaults).
    let config_path = std::env::var("ENCORE_CONFIG")
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let config = AppConfig::load(Path::new(&config_path))?;
    info!(
        host = config.server.host,
        port = config.server.port,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    // 3. Connect the PostgreSQL pool.
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;

    // 4. Run pending migrations.
    pool.run_migrations().await?;

    // 5. Build the shared application state.
    let state = Arc::new(AppState::new(pool));

    // 6. Serve the booking API.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
