//! Live deployment feed state.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use ops::feed::DeploymentEvent;

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "offline",
            Self::Connecting => "connecting",
            Self::Connected => "live",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub connection_status: ConnectionStatus,
    /// Most recent event received.
    pub latest: Option<DeploymentEvent>,
    /// Events received since page load, across reconnects.
    pub received: u64,
}

impl FeedState {
    pub fn record(&mut self, event: DeploymentEvent) {
        self.latest = Some(event);
        self.received += 1;
    }
}
