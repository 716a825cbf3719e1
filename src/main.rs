use clearledger::api::build_router;
use clearledger::config::CONFIG;
use clearledger::{InMemoryStorage, LedgerService};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let storage = InMemoryStorage::new();
    let service = Arc::new(LedgerService::with_limits(storage, CONFIG.session_limits()));
    Arc::clone(&service).start_eviction_task(CONFIG.session_sweep_interval());
    let app = build_router(service, CONFIG.request_timeout());

    // Start server
    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    info!("API docs at http://{}/swagger-ui", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
