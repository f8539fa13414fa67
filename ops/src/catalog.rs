//! Closed vocabularies shared by every panel: services, environments, and
//! health statuses, plus the colour tone each status renders with.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpsError;

// =============================================================================
// SERVICE
// =============================================================================

/// A deployable service known to the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    #[default]
    AuthService,
    PaymentService,
    CheckoutService,
}

impl Service {
    /// Display order used by every service selector.
    pub const ALL: [Service; 3] = [Service::AuthService, Service::PaymentService, Service::CheckoutService];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthService => "auth-service",
            Self::PaymentService => "payment-service",
            Self::CheckoutService => "checkout-service",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|svc| svc.as_str() == s)
            .ok_or_else(|| OpsError::UnknownService(s.to_owned()))
    }
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Deployment target environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Test,
    #[default]
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Test, Environment::Prod];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| OpsError::UnknownEnvironment(s.to_owned()))
    }
}

// =============================================================================
// HEALTH
// =============================================================================

/// Colour role a status renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Neutral,
}

impl Tone {
    /// CSS modifier suffix, e.g. `chip--success`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Neutral => "neutral",
        }
    }
}

/// Health of a service or of a single health check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
        }
    }

    /// Tone for a deployment or service status chip.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Healthy => Tone::Success,
            Self::Degraded => Tone::Warning,
            Self::Unhealthy => Tone::Error,
        }
    }

    /// Tone for a pre/post check chip. Checks only distinguish pass from not-pass.
    #[must_use]
    pub fn check_tone(self) -> Tone {
        if self == Self::Healthy { Tone::Success } else { Tone::Warning }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "degraded" => Ok(Self::Degraded),
            "unhealthy" => Ok(Self::Unhealthy),
            other => Err(OpsError::UnknownHealth(other.to_owned())),
        }
    }
}
