use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_gateway::cache::SearchCache;
use transit_gateway::config::Config;
use transit_gateway::sl::{SlClient, SlConfig};
use transit_gateway::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration; refuse to serve traffic with a bad environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration is invalid");
            std::process::exit(1);
        }
    };

    // Create SL client
    let sl_config = SlConfig::new(&config.api_url, &config.api_key, &config.stop_lookup_api_key);
    let sl_client = SlClient::new(sl_config).expect("Failed to create SL client");

    // Build app state
    let state = AppState::new(sl_client, SearchCache::new());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Transit departures gateway listening on http://{addr}");
    tracing::info!("  GET /health              - Health check");
    tracing::info!("  GET /times/:stationId    - Live departures for a station");
    tracing::info!("  GET /stations?q=<name>   - Station name search");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
