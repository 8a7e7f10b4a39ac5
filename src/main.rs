//! dexscreener-gateway server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use tracing_subscriber::EnvFilter;

use dexscreener_gateway::app_state::AppState;
use dexscreener_gateway::build_app;
use dexscreener_gateway::config::GatewayConfig;
use dexscreener_gateway::service::DexScreenerClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        upstream = %config.upstream_base_url,
        "starting dexscreener-gateway"
    );

    // Build service layer
    let upstream = DexScreenerClient::new(config.upstream_base_url.as_str())?;

    // Build router
    let app = build_app(AppState::new(upstream));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
