use super::*;
use ops::{Environment, Service};

#[test]
fn feed_state_default_is_disconnected_and_empty() {
    let state = FeedState::default();
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
    assert!(state.latest.is_none());
    assert_eq!(state.received, 0);
}

#[test]
fn record_keeps_latest_and_counts() {
    let mut state = FeedState::default();
    let first = DeploymentEvent::snapshot(Service::AuthService, Environment::Prod, 1);
    let second = DeploymentEvent::snapshot(Service::AuthService, Environment::Prod, 6);

    state.record(first);
    state.record(second.clone());

    assert_eq!(state.latest, Some(second));
    assert_eq!(state.received, 2);
}

#[test]
fn connection_labels() {
    assert_eq!(ConnectionStatus::Connected.label(), "live");
    assert_eq!(ConnectionStatus::Connecting.label(), "connecting");
    assert_eq!(ConnectionStatus::Disconnected.label(), "offline");
}
