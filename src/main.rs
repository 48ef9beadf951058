use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;
use websitebio_imagegen::{app::envy::Envy, router, AppState};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(3000);
    tracing::info!(
        endpoint = %envy.whomeai_api_endpoint,
        has_api_key = envy.has_api_key(),
        custom_api_key = envy.has_custom_api_key(),
        "configuration loaded"
    );

    // app
    let app = router(AppState::new(envy));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}
