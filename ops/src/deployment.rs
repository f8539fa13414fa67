//! Deployment status records for the deployment dashboard.
//!
//! The record table is fixed; only the environment and the deploy timestamps
//! vary with the request.

#[cfg(test)]
#[path = "deployment_test.rs"]
mod deployment_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{Environment, HealthStatus, Service};
use crate::clock::{MS_PER_HOUR, MS_PER_MINUTE};

/// Pre- and post-deploy health check results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthChecks {
    pub pre: HealthStatus,
    pub post: HealthStatus,
}

impl HealthChecks {
    #[must_use]
    pub fn passing() -> Self {
        Self { pre: HealthStatus::Healthy, post: HealthStatus::Healthy }
    }
}

/// One service's current deployment in an environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub service: Service,
    pub environment: Environment,
    pub status: HealthStatus,
    pub version: String,
    /// Milliseconds since the Unix epoch.
    pub last_deployed_ms: i64,
    pub artifact: String,
    pub health_checks: HealthChecks,
}

/// Artifact reference for a service build, `service:version`.
#[must_use]
pub fn artifact_ref(service: Service, version: &str) -> String {
    format!("{service}:{version}")
}

/// Current deployments for `env`, relative to `now_ms`.
#[must_use]
pub fn fetch_deployments(env: Environment, now_ms: i64) -> Vec<Deployment> {
    let rows: [(&str, Service, HealthStatus, &str, i64, HealthStatus); 3] = [
        ("1", Service::AuthService, HealthStatus::Healthy, "v2.3.1", MS_PER_HOUR, HealthStatus::Healthy),
        ("2", Service::PaymentService, HealthStatus::Degraded, "v1.9.4", 2 * MS_PER_HOUR, HealthStatus::Degraded),
        ("3", Service::CheckoutService, HealthStatus::Healthy, "v3.0.0", 30 * MS_PER_MINUTE, HealthStatus::Healthy),
    ];

    rows.into_iter()
        .map(|(id, service, status, version, age_ms, post)| Deployment {
            id: id.to_owned(),
            service,
            environment: env,
            status,
            version: version.to_owned(),
            last_deployed_ms: now_ms - age_ms,
            artifact: artifact_ref(service, version),
            health_checks: HealthChecks { pre: HealthStatus::Healthy, post },
        })
        .collect()
}
