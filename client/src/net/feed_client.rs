//! WebSocket client for the live deployment feed.
//!
//! Connects to `/ws/deploy`, records each event into `FeedState`, and
//! reconnects with exponential backoff when the socket drops.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. URL and backoff helpers stay testable.
//!
//! ERROR HANDLING
//! ==============
//! Malformed frames are logged and skipped; transport failures end the
//! session and fall through to the reconnect loop.

#[cfg(test)]
#[path = "feed_client_test.rs"]
mod feed_client_test;

use ops::feed::FEED_PATH;

#[cfg(feature = "hydrate")]
use crate::state::feed::{ConnectionStatus, FeedState};
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

pub const INITIAL_BACKOFF_MS: u32 = 1_000;
pub const MAX_BACKOFF_MS: u32 = 30_000;

/// Feed URL for a page served at `protocol` (`"https:"`, `"http:"`) and `host`.
#[must_use]
pub fn feed_url(protocol: &str, host: &str) -> String {
    let scheme = if protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{FEED_PATH}")
}

/// Delay before the reconnect after one that waited `current_ms`.
#[must_use]
pub fn next_backoff_ms(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Spawn the feed lifecycle as a local async task.
#[cfg(feature = "hydrate")]
pub fn spawn_feed_client(feed: RwSignal<FeedState>) {
    leptos::task::spawn_local(feed_client_loop(feed));
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn feed_client_loop(feed: RwSignal<FeedState>) {
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        feed.update(|f| f.connection_status = ConnectionStatus::Connecting);

        let location = web_sys::window().map(|w| w.location());
        let protocol = location.as_ref().and_then(|l| l.protocol().ok()).unwrap_or_default();
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = feed_url(&protocol, &host);

        match connect_and_run(&url, feed).await {
            Ok(received) => {
                log::info!("feed disconnected after {received} events");
                if received > 0 {
                    backoff_ms = INITIAL_BACKOFF_MS;
                }
            }
            Err(e) => log::warn!("feed error: {e}"),
        }

        feed.update(|f| f.connection_status = ConnectionStatus::Disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms);
    }
}

/// Read events until the socket closes. Returns how many were recorded.
#[cfg(feature = "hydrate")]
async fn connect_and_run(url: &str, feed: RwSignal<FeedState>) -> Result<u64, String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let mut received = 0;

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => match ops::feed::parse_event(&text) {
                Ok(event) => {
                    received += 1;
                    feed.update(|f| {
                        f.connection_status = ConnectionStatus::Connected;
                        f.record(event);
                    });
                }
                Err(e) => log::warn!("feed: skipping frame: {e}"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(received)
}
