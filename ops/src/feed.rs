//! Live deployment event pushed over `/ws/deploy`.
//!
//! The JSON shape is the feed's only wire contract:
//! `{id, service, environment, status, health_checks: {pre, post}, timestamp}`
//! with `timestamp` in Unix seconds.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Environment, HealthStatus, Service};
use crate::deployment::HealthChecks;
use crate::error::OpsError;

/// Path the server mounts the feed on.
pub const FEED_PATH: &str = "/ws/deploy";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEvent {
    pub id: Uuid,
    pub service: Service,
    pub environment: Environment,
    pub status: HealthStatus,
    pub health_checks: HealthChecks,
    pub timestamp: i64,
}

impl DeploymentEvent {
    /// Current state of `service` in `env`, stamped with a fresh id.
    #[must_use]
    pub fn snapshot(service: Service, environment: Environment, now_secs: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            service,
            environment,
            status: HealthStatus::Healthy,
            health_checks: HealthChecks::passing(),
            timestamp: now_secs,
        }
    }

    /// Encode as one text frame.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; with the field types used here it does not occur in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Decode one feed text frame.
///
/// # Errors
///
/// Returns [`OpsError::MalformedEvent`] when `text` is not a valid event.
pub fn parse_event(text: &str) -> Result<DeploymentEvent, OpsError> {
    Ok(serde_json::from_str(text)?)
}
