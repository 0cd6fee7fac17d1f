use tracing::info;

use promocode_core::config::Config;
use promocode_core::tracing::init_tracing;
use promocode_service::config::ServiceConfig;
use promocode_service::router::build_router;
use promocode_service::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ServiceConfig::from_env();

    let state = AppState::seeded();

    let router = build_router(state);
    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("promocode service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
