//! Deployment feed service: client registry and periodic broadcast.
//!
//! DESIGN
//! ======
//! One background task ticks at the configured interval and fans a fresh
//! snapshot out to every registered client channel. Delivery uses
//! `try_send`, so a stalled client never holds up the tick; a client whose
//! channel is closed or full is evicted and its socket loop shuts down.

use std::time::{SystemTime, UNIX_EPOCH};

use ops::feed::DeploymentEvent;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::state::{AppState, FeedSender};

/// Per-client queue depth.
pub const FEED_CHANNEL_CAPACITY: usize = 16;

/// Current time as seconds since Unix epoch.
fn now_secs() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_secs()).unwrap_or(0)
}

/// Fresh event for the configured feed target.
#[must_use]
pub fn snapshot(state: &AppState) -> DeploymentEvent {
    let feed = state.config.feed;
    DeploymentEvent::snapshot(feed.service, feed.environment, now_secs())
}

pub async fn register(state: &AppState, client_id: Uuid, tx: FeedSender) {
    state.feed_clients.write().await.insert(client_id, tx);
}

pub async fn unregister(state: &AppState, client_id: Uuid) {
    state.feed_clients.write().await.remove(&client_id);
}

/// Deliver `event` to every client. Returns how many clients accepted it.
pub async fn broadcast(state: &AppState, event: &DeploymentEvent) -> usize {
    let mut delivered = 0;
    let mut evicted = Vec::new();
    {
        let clients = state.feed_clients.read().await;
        for (client_id, tx) in clients.iter() {
            match tx.try_send(event.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!(%client_id, error = %e, "feed: evicting client");
                    evicted.push(*client_id);
                }
            }
        }
    }

    if !evicted.is_empty() {
        let mut clients = state.feed_clients.write().await;
        for client_id in &evicted {
            clients.remove(client_id);
        }
    }
    delivered
}

/// Spawn the periodic broadcast task. Returns a handle for shutdown.
pub fn spawn_feed_task(state: AppState) -> JoinHandle<()> {
    let feed = state.config.feed;
    info!(
        interval_secs = feed.interval.as_secs(),
        service = %feed.service,
        environment = %feed.environment,
        "deployment feed configured"
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(feed.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick fires immediately; new clients already get a snapshot on connect.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let event = snapshot(&state);
            let delivered = broadcast(&state, &event).await;
            debug!(id = %event.id, delivered, "feed: tick");
        }
    })
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
