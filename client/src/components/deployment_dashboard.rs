//! Deployment dashboard: per-environment deployment cards plus the live feed.

#[cfg(test)]
#[path = "deployment_dashboard_test.rs"]
mod deployment_dashboard_test;

use leptos::prelude::*;
use ops::clock::format_timestamp_ms;
use ops::deployment::{Deployment, fetch_deployments};
use ops::{Environment, HealthStatus};

use crate::components::live_feed::LiveFeedStrip;
use crate::components::selectors::EnvironmentSelect;
use crate::components::status_chip::StatusChip;
use crate::state::ui::Tab;
use crate::util::clock::now_ms;

#[component]
pub fn DeploymentDashboard() -> impl IntoView {
    let environment = RwSignal::new(Environment::default());
    let deployments = RwSignal::new(Vec::<Deployment>::new());

    // Runs on mount and whenever the environment changes.
    Effect::new(move || {
        let env = environment.get();
        deployments.set(fetch_deployments(env, now_ms()));
    });

    let on_refresh = move |_| {
        deployments.set(fetch_deployments(environment.get_untracked(), now_ms()));
    };

    view! {
        <section class="panel" role="tabpanel" id={Tab::Deployment.panel_id()} aria-labelledby={Tab::Deployment.tab_id()}>
            <h2 class="panel__title">"📦 Deployment Status Dashboard"</h2>
            <div class="panel__controls">
                <EnvironmentSelect value=environment />
                <button class="btn btn--outlined" on:click=on_refresh>
                    "Refresh"
                </button>
            </div>
            <LiveFeedStrip />
            <div class="card-grid">
                {move || deployments.get().into_iter().map(deployment_card).collect_view()}
            </div>
        </section>
    }
}

fn check_label(stage: &str, status: HealthStatus) -> String {
    format!("{stage}: {}", status.as_str())
}

fn deployment_card(deployment: Deployment) -> impl IntoView {
    let checks = deployment.health_checks;
    view! {
        <div class="card deployment-card">
            <div class="deployment-card__header">
                <h3 class="card__title">{deployment.service.as_str()}</h3>
                <StatusChip label=deployment.status.as_str() tone=deployment.status.tone() />
            </div>
            <p class="deployment-card__row">"Version: " {deployment.version}</p>
            <p class="deployment-card__row">"Artifact: " {deployment.artifact}</p>
            <p class="deployment-card__row">
                "Last Deployed: " {format_timestamp_ms(deployment.last_deployed_ms)}
            </p>
            <div class="deployment-card__checks">
                <StatusChip label=check_label("Pre-check", checks.pre) tone=checks.pre.check_tone() small=true />
                <StatusChip label=check_label("Post-check", checks.post) tone=checks.post.check_tone() small=true />
            </div>
        </div>
    }
}
