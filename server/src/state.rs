//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and the registry of connected deployment feed
//! clients, each reachable through its own bounded channel.

use std::collections::HashMap;
use std::sync::Arc;

use ops::feed::DeploymentEvent;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::config::ServerConfig;

/// Outgoing event queue per feed client.
pub type FeedSender = mpsc::Sender<DeploymentEvent>;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Connected feed clients: `client_id` -> sender for outgoing events.
    pub feed_clients: Arc<RwLock<HashMap<Uuid, FeedSender>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config, feed_clients: Arc::new(RwLock::new(HashMap::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_state_has_no_feed_clients() {
        let state = test_helpers::test_app_state();
        assert!(state.feed_clients.read().await.is_empty());
    }

    #[tokio::test]
    async fn clones_share_client_registry() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();
        let (tx, _rx) = mpsc::channel(1);
        clone.feed_clients.write().await.insert(Uuid::new_v4(), tx);
        assert_eq!(state.feed_clients.read().await.len(), 1);
    }
}
