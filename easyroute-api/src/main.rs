use std::net::SocketAddr;
use std::sync::Arc;

use easyroute_api::{
    app,
    state::{AppState, AuthConfig},
};
use easyroute_store::DomainStore;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easyroute_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = easyroute_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Easy Route API on port {}", config.server.port);

    let store = Arc::new(RwLock::new(DomainStore::with_fixtures()));

    // Booking event broadcast channel (SSE)
    let (events_tx, _) = tokio::sync::broadcast::channel(100);

    let app_state = AppState {
        store,
        events_tx,
        rules: config.service.clone(),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
