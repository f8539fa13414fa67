//! Deployment trigger panel with copilot pre-deploy advice.

#[cfg(test)]
#[path = "trigger_panel_test.rs"]
mod trigger_panel_test;

use leptos::prelude::*;
use ops::trigger::{DEFAULT_VERSION, DeploymentRequest, Risk, StepIcon, TriggerFlow};
use ops::{Environment, Service};

use crate::components::selectors::{EnvironmentSelect, ServiceSelect};
use crate::state::ui::Tab;
use crate::util::clock::now_ms;

fn alert_class(risk: Risk) -> &'static str {
    match risk {
        Risk::Safe => "alert alert--success",
        Risk::Warning => "alert alert--warning",
    }
}

fn step_class(line: &str) -> String {
    match StepIcon::for_line(line) {
        Some(icon) => format!("log-step log-step--{}", icon.as_str()),
        None => "log-step".to_owned(),
    }
}

#[component]
pub fn TriggerPanel() -> impl IntoView {
    let service = RwSignal::new(Service::default());
    let environment = RwSignal::new(Environment::default());
    let version = RwSignal::new(DEFAULT_VERSION.to_owned());
    let flow = RwSignal::new(TriggerFlow::default());

    let request = move || DeploymentRequest {
        service: service.get_untracked(),
        environment: environment.get_untracked(),
        version: version.get_untracked(),
    };

    let on_trigger = move |_| {
        let req = request();
        flow.update(|f| f.trigger(&req, now_ms()));
    };
    let on_proceed = move |_| {
        let req = request();
        flow.update(|f| f.proceed(&req, now_ms()));
    };

    view! {
        <section class="panel" role="tabpanel" id={Tab::Trigger.panel_id()} aria-labelledby={Tab::Trigger.tab_id()}>
            <h2 class="panel__title">"⚙️ Trigger Deployment"</h2>
            <div class="panel__controls">
                <ServiceSelect value=service />
                <EnvironmentSelect value=environment />
                <label class="field field--narrow">
                    <span class="field__label">"Version"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || version.get()
                        on:input=move |ev| version.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--contained" on:click=on_trigger>
                    "Trigger Deployment"
                </button>
            </div>
            {move || {
                let current = flow.get();
                let awaiting = current.awaiting_confirmation;
                current
                    .advice
                    .map(|advice| {
                        view! {
                            <div class=alert_class(advice.risk) role="alert">
                                <div class="alert__body">
                                    <h4 class="alert__heading">"AI Copilot Suggestion:"</h4>
                                    <p class="alert__text">{advice.text}</p>
                                </div>
                                {awaiting
                                    .then(|| {
                                        view! {
                                            <button class="btn btn--warning" on:click=on_proceed>
                                                "Proceed Anyway"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
            {move || {
                flow.get()
                    .log
                    .map(|lines| {
                        view! {
                            <div class="card">
                                <h3 class="card__title">"🚀 Deployment Status"</h3>
                                <ul class="log-list">
                                    {lines
                                        .into_iter()
                                        .map(|line| { let class = step_class(&line); view! { <li class=class>{line}</li> } })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
