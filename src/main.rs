//! Weather Proxy Server
//!
//! HTTP proxy service that forwards weather queries to OpenWeatherMap
//! with a server-side API key

use anyhow::{Context, Result};
use tracing::{info, warn};
use weatherproxy::handlers::{create_router, health};
use weatherproxy::utils::logging::init_logging;
use weatherproxy::{version_info, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings from environment (and .env)
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging.level, &settings.logging.format);
    health::mark_started();
    info!("{}", version_info());

    let addr = settings.listen_addr();
    let port = settings.server.port;
    let has_api_key = settings.has_api_key();

    // Create router
    let app = create_router(settings).await?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌦️ Server running on port {}", port);
    if has_api_key {
        info!("Using API Key: ✅ Configured");
    } else {
        warn!("Using API Key: ❌ Missing");
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}
