//! Clinic UI server
//!
//! Entry point: loads configuration, installs logging and serves the pages.

use std::sync::Arc;

use clinic_ui::config::AppConfig;
use clinic_ui::{server, telemetry};
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = Arc::new(AppConfig::load()?);
    telemetry::init(&config.logging);

    info!(
        name: "config.loaded",
        address = %config.server.addr(),
        brand = %config.ui.brand_name,
        static_dir = %config.ui.static_dir,
        "Configuration loaded"
    );

    server::start_server(config).await
}
