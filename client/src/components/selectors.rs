//! Labeled dropdowns for the service and environment vocabularies.

use leptos::prelude::*;
use ops::{Environment, Service};

/// Service dropdown bound to `value`. Unknown option values are ignored.
#[component]
pub fn ServiceSelect(value: RwSignal<Service>) -> impl IntoView {
    let on_change = move |ev| {
        if let Ok(svc) = event_target_value(&ev).parse::<Service>() {
            value.set(svc);
        }
    };

    view! {
        <label class="field">
            <span class="field__label">"Service"</span>
            <select class="field__select" on:change=on_change prop:value=move || value.get().as_str()>
                {Service::ALL
                    .into_iter()
                    .map(|svc| {
                        view! {
                            <option value=svc.as_str() selected=move || value.get() == svc>
                                {svc.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Environment dropdown bound to `value`.
#[component]
pub fn EnvironmentSelect(value: RwSignal<Environment>) -> impl IntoView {
    let on_change = move |ev| {
        if let Ok(env) = event_target_value(&ev).parse::<Environment>() {
            value.set(env);
        }
    };

    view! {
        <label class="field field--narrow">
            <span class="field__label">"Environment"</span>
            <select class="field__select" on:change=on_change prop:value=move || value.get().as_str()>
                {Environment::ALL
                    .into_iter()
                    .map(|env| {
                        view! {
                            <option value=env.as_str() selected=move || value.get() == env>
                                {env.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
