//! Deployment trigger: risk advisory, confirmation gate, and rollout log.
//!
//! LIFECYCLE
//! =========
//! 1. `trigger` computes advice for the requested (service, environment).
//! 2. Safe advice proceeds straight to the rollout log.
//! 3. Warning advice waits for an explicit `proceed`.
//!
//! The advice stays visible after the rollout completes.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{Environment, Service};
use crate::clock::format_timestamp_ms;
use crate::deployment::artifact_ref;

pub const DEFAULT_VERSION: &str = "v1.0.0";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Safe,
    Warning,
}

/// Copilot advisory shown before a deploy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub risk: Risk,
    pub text: String,
}

impl Advice {
    #[must_use]
    pub fn needs_confirmation(&self) -> bool {
        self.risk == Risk::Warning
    }
}

#[must_use]
pub fn advise(service: Service, env: Environment) -> Advice {
    if service == Service::PaymentService && env == Environment::Prod {
        return Advice {
            risk: Risk::Warning,
            text: "⚠️ Risk: payment-service has recent degraded health post last deploy.\n\
                   Suggestion: Check logs and latency before proceeding."
                .to_owned(),
        };
    }
    Advice { risk: Risk::Safe, text: "✅ No known issues. Safe to deploy.".to_owned() }
}

/// What the operator asked to deploy. `version` is free text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub service: Service,
    pub environment: Environment,
    pub version: String,
}

impl Default for DeploymentRequest {
    fn default() -> Self {
        Self { service: Service::default(), environment: Environment::default(), version: DEFAULT_VERSION.to_owned() }
    }
}

/// Step-by-step rollout transcript, completed at `now_ms`.
#[must_use]
pub fn rollout_log(request: &DeploymentRequest, now_ms: i64) -> Vec<String> {
    vec![
        "🚀 Triggering deployment...".to_owned(),
        format!("Service: {}", request.service),
        format!("Environment: {}", request.environment),
        format!("Version: {}", request.version),
        "---------------------------".to_owned(),
        "✅ Deployment successful!".to_owned(),
        "🔁 Restarting pods...".to_owned(),
        "🔍 Running pre-checks...".to_owned(),
        "✅ Health: OK".to_owned(),
        format!("📦 Artifact: {}", artifact_ref(request.service, &request.version)),
        format!("🕒 Completed at: {}", format_timestamp_ms(now_ms)),
    ]
}

/// Icon shown beside a rollout log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIcon {
    Rocket,
    Restart,
    Health,
    Artifact,
    Clock,
}

impl StepIcon {
    #[must_use]
    pub fn for_line(line: &str) -> Option<Self> {
        [
            ("Triggering", Self::Rocket),
            ("Restarting", Self::Restart),
            ("Health", Self::Health),
            ("Artifact", Self::Artifact),
            ("Completed", Self::Clock),
        ]
        .into_iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|(_, icon)| icon)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rocket => "rocket",
            Self::Restart => "restart",
            Self::Health => "health",
            Self::Artifact => "artifact",
            Self::Clock => "clock",
        }
    }
}

// =============================================================================
// FLOW
// =============================================================================

/// Trigger panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerFlow {
    pub advice: Option<Advice>,
    pub awaiting_confirmation: bool,
    pub log: Option<Vec<String>>,
}

impl TriggerFlow {
    /// Ask for advice, then deploy unless the advice needs confirmation.
    pub fn trigger(&mut self, request: &DeploymentRequest, now_ms: i64) {
        let advice = advise(request.service, request.environment);
        let gated = advice.needs_confirmation();
        self.advice = Some(advice);
        if gated {
            self.awaiting_confirmation = true;
        } else {
            self.proceed(request, now_ms);
        }
    }

    /// Deploy regardless of advice.
    pub fn proceed(&mut self, request: &DeploymentRequest, now_ms: i64) {
        self.log = Some(rollout_log(request, now_ms));
        self.awaiting_confirmation = false;
    }
}
