//! Root cause analysis view.

#[cfg(test)]
#[path = "rca_view_test.rs"]
mod rca_view_test;

use leptos::prelude::*;
use ops::rca::{RcaReport, analyze};
use ops::{Environment, Service};

use crate::components::selectors::{EnvironmentSelect, ServiceSelect};
use crate::state::ui::Tab;

#[component]
pub fn RcaView() -> impl IntoView {
    let service = RwSignal::new(Service::default());
    let environment = RwSignal::new(Environment::default());
    let report = RwSignal::new(None::<RcaReport>);

    let on_simulate = move |_| {
        report.set(Some(analyze(service.get_untracked(), environment.get_untracked())));
    };

    view! {
        <section class="panel" role="tabpanel" id={Tab::Rca.panel_id()} aria-labelledby={Tab::Rca.tab_id()}>
            <h2 class="panel__title">"🧠 RCA Simulation"</h2>
            <div class="panel__controls">
                <ServiceSelect value=service />
                <EnvironmentSelect value=environment />
                <button class="btn btn--contained" on:click=on_simulate>
                    "Simulate RCA"
                </button>
            </div>
            {move || {
                report
                    .get()
                    .map(|r| {
                        view! {
                            <div class="card-grid">
                                {report_cards(r)
                                    .into_iter()
                                    .map(|(title, body)| view! { <RcaCard title=title body=body /> })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </section>
    }
}

/// Card titles and bodies, in display order.
fn report_cards(report: RcaReport) -> [(&'static str, String); 4] {
    let health = report.health.to_pretty_json();
    [
        ("Log Summary", report.logs),
        ("Health Check (Pre vs Post)", health),
        ("Config Differences", report.config_diff),
        ("AI Copilot Suggestion", report.suggestion),
    ]
}

#[component]
fn RcaCard(title: &'static str, body: String) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">{title}</h3>
            <pre class="card__pre">{body}</pre>
        </div>
    }
}
