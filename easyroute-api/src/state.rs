use std::sync::Arc;

use easyroute_domain::BookingEvent;
use easyroute_store::app_config::ServiceRules;
use easyroute_store::DomainStore;
use tokio::sync::{broadcast, RwLock};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<DomainStore>>,
    pub events_tx: broadcast::Sender<BookingEvent>,
    pub auth: AuthConfig,
    pub rules: ServiceRules,
}

impl AppState {
    /// Hold the request for the configured artificial delay, so mutations
    /// feel like remote calls even against the in-memory store.
    pub async fn simulate_latency(&self) {
        if self.rules.simulated_latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(
                self.rules.simulated_latency_ms,
            ))
            .await;
        }
    }
}
