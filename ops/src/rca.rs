//! Root-cause analysis simulation.
//!
//! The report is a fixed template: a DB timeout regression that degrades the
//! service after a deploy. Only the service and environment names vary.

#[cfg(test)]
#[path = "rca_test.rs"]
mod rca_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{Environment, HealthStatus, Service};

/// One health probe reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProbe {
    pub status: HealthStatus,
    pub latency_ms: u32,
    pub error_rate: String,
}

/// Health before and after the suspect deploy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthComparison {
    pub pre: HealthProbe,
    pub post: HealthProbe,
}

impl HealthComparison {
    /// Two-space indented JSON, as shown in the health check card.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RcaReport {
    pub logs: String,
    pub health: HealthComparison,
    pub config_diff: String,
    pub suggestion: String,
}

/// Run the simulated analysis for `service` in `env`.
#[must_use]
pub fn analyze(service: Service, env: Environment) -> RcaReport {
    let logs = [
        format!("[ERROR] {service} - DB connection timeout at 2024-06-01T13:45Z"),
        format!("[WARN] {service} - Retry attempt failed"),
        format!("[INFO] Deployment started for {service}:{env}"),
        "[INFO] Health check failed post deployment".to_owned(),
    ]
    .join("\n");

    RcaReport {
        logs,
        health: HealthComparison {
            pre: HealthProbe { status: HealthStatus::Healthy, latency_ms: 120, error_rate: "0.1%".to_owned() },
            post: HealthProbe { status: HealthStatus::Degraded, latency_ms: 800, error_rate: "6.5%".to_owned() },
        },
        config_diff: "- DB_TIMEOUT=5\n+ DB_TIMEOUT=1  <-- Likely cause".to_owned(),
        suggestion: "Root cause is likely a misconfigured `DB_TIMEOUT`. Recommend reverting to previous value and redeploying."
            .to_owned(),
    }
}
