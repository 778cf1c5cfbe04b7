//! Payroll service binary.
//!
//! Usage: `payroll-service [CONFIG_PATH]`. The configuration path defaults
//! to `$PAYROLL_CONFIG`, then `./config/service.yaml`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payroll_service::api::{create_router, AppState};
use payroll_service::config::ConfigLoader;
use payroll_service::storage;

const CONFIG_ENV: &str = "PAYROLL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = ConfigLoader::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?
        .into_config();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.storage.backend,
        error_policy = ?config.errors.policy,
        "Starting payroll service"
    );

    let store = storage::connect(&config)
        .await
        .context("Failed to initialize storage")?;
    let app = create_router(AppState::new(store, config.errors.policy));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,payroll_service=debug,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
