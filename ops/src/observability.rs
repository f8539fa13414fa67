//! Simulated service health, latency, and recent logs for the observability panel.
//!
//! Each tick draws one latency sample and derives health and log lines from it.

#[cfg(test)]
#[path = "observability_test.rs"]
mod observability_test;

use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{HealthStatus, Service};

/// Sampled latency range in milliseconds.
pub const LATENCY_RANGE_MS: Range<u32> = 50..250;
/// Latencies at or above this are reported as degraded.
pub const DEGRADED_LATENCY_MS: u32 = 180;
/// Full scale of the latency gauge.
pub const LATENCY_GAUGE_MAX_MS: u32 = 250;
/// Re-sample period for the panel.
pub const REFRESH_INTERVAL_MS: u64 = 3_000;
/// Latency shown before the first sample arrives.
pub const INITIAL_LATENCY_MS: u32 = 120;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilitySample {
    pub service: Service,
    pub health: HealthStatus,
    pub latency_ms: u32,
    pub logs: Vec<String>,
}

impl ObservabilitySample {
    /// State shown before the first tick: healthy at the initial latency, no logs.
    #[must_use]
    pub fn initial(service: Service) -> Self {
        Self { service, health: HealthStatus::Healthy, latency_ms: INITIAL_LATENCY_MS, logs: Vec::new() }
    }

    /// Gauge fill in percent, clamped to `[0, 100]`.
    #[must_use]
    pub fn gauge_percent(&self) -> f64 {
        (f64::from(self.latency_ms) / f64::from(LATENCY_GAUGE_MAX_MS) * 100.0).clamp(0.0, 100.0)
    }
}

#[must_use]
pub fn health_for_latency(latency_ms: u32) -> HealthStatus {
    if latency_ms < DEGRADED_LATENCY_MS { HealthStatus::Healthy } else { HealthStatus::Degraded }
}

/// Build the sample for a known latency.
#[must_use]
pub fn sample_with_latency(service: Service, latency_ms: u32) -> ObservabilitySample {
    let logs = vec![
        format!("[INFO] {service}: request completed in {latency_ms}ms"),
        format!("[DEBUG] {service}: auth header valid"),
        format!("[INFO] {service}: 200 OK"),
    ];
    ObservabilitySample { service, health: health_for_latency(latency_ms), latency_ms, logs }
}

/// Draw a latency from `rng` and build the sample.
pub fn sample<R: Rng + ?Sized>(service: Service, rng: &mut R) -> ObservabilitySample {
    sample_with_latency(service, rng.random_range(LATENCY_RANGE_MS))
}

// =============================================================================
// LOG LEVELS
// =============================================================================

/// Severity tag parsed from a bracketed log prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
    Other,
}

impl LogLevel {
    /// Classify by the first matching tag, checked in INFO, DEBUG, WARN, ERROR order.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        [("[INFO]", Self::Info), ("[DEBUG]", Self::Debug), ("[WARN]", Self::Warn), ("[ERROR]", Self::Error)]
            .into_iter()
            .find(|(tag, _)| line.contains(tag))
            .map_or(Self::Other, |(_, level)| level)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Other => "other",
        }
    }
}
