//! WebSocket handler: deployment feed relay.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → register the client's channel with the feed service
//! 2. Send one snapshot immediately so the dashboard never starts blank
//! 3. Relay every broadcast event as a JSON text frame
//! 4. Close, socket error, or eviction → unregister
//!
//! Inbound client messages are ignored apart from close.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use ops::feed::DeploymentEvent;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::services::feed;
use crate::state::AppState;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let (client_tx, mut client_rx) = mpsc::channel::<DeploymentEvent>(feed::FEED_CHANNEL_CAPACITY);
    feed::register(&state, client_id, client_tx).await;
    info!(%client_id, "ws: feed client connected");

    let welcome = feed::snapshot(&state);
    if send_event(&mut socket, &welcome).await.is_ok() {
        loop {
            tokio::select! {
                msg = socket.recv() => {
                    match msg {
                        Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                        Some(Ok(_)) => {}
                    }
                }
                event = client_rx.recv() => {
                    // `None` means the feed service evicted this client.
                    let Some(event) = event else { break };
                    if send_event(&mut socket, &event).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    feed::unregister(&state, client_id).await;
    info!(%client_id, "ws: feed client disconnected");
}

async fn send_event(socket: &mut WebSocket, event: &DeploymentEvent) -> Result<(), axum::Error> {
    let text = match event.to_json() {
        Ok(text) => text,
        Err(e) => {
            warn!(id = %event.id, error = %e, "ws: failed to encode event");
            return Ok(());
        }
    };
    socket.send(Message::Text(text.into())).await
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
