//! Observability panel: simulated health, latency, and logs for one service.
//!
//! A fresh sample replaces the previous one every three seconds. Changing
//! the selected service resets the sample and restarts the ticker; leaving
//! the tab stops it.

#[cfg(test)]
#[path = "observability_panel_test.rs"]
mod observability_panel_test;

use leptos::prelude::*;
use ops::observability::{LATENCY_GAUGE_MAX_MS, LogLevel, ObservabilitySample};
use ops::{HealthStatus, Service};

use crate::components::selectors::ServiceSelect;
use crate::components::status_chip::StatusChip;
use crate::state::ui::Tab;

fn health_title(service: Service) -> String {
    format!("{} Health", service.as_str())
}

fn health_label(health: HealthStatus) -> String {
    health.as_str().to_uppercase()
}

/// Latency bar colour follows the degraded threshold, like the health chip.
fn gauge_fill_class(health: HealthStatus) -> String {
    format!("gauge__fill gauge__fill--{}", health.tone().as_str())
}

#[component]
pub fn ObservabilityPanel() -> impl IntoView {
    let service = RwSignal::new(Service::default());
    let sample = RwSignal::new(ObservabilitySample::initial(Service::default()));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicU64, Ordering};

        use ops::observability::REFRESH_INTERVAL_MS;

        // Each ticker runs while the generation it was started with is current.
        let generation = Arc::new(AtomicU64::new(0));
        let ticker_generation = generation.clone();
        Effect::new(move || {
            let svc = service.get();
            sample.set(ObservabilitySample::initial(svc));
            let mine = ticker_generation.fetch_add(1, Ordering::Relaxed) + 1;
            let current = ticker_generation.clone();
            leptos::task::spawn_local(async move {
                let mut rng = crate::util::clock::sampling_rng();
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(REFRESH_INTERVAL_MS)).await;
                    if current.load(Ordering::Relaxed) != mine {
                        break;
                    }
                    let next = ops::observability::sample(svc, &mut rng);
                    if sample.try_set(next).is_some() {
                        break;
                    }
                }
            });
        });
        on_cleanup(move || {
            generation.fetch_add(1, Ordering::Relaxed);
        });
    }

    view! {
        <section class="panel" role="tabpanel" id={Tab::Observability.panel_id()} aria-labelledby={Tab::Observability.tab_id()}>
            <div class="panel__controls">
                <ServiceSelect value=service />
            </div>
            {move || {
                let current = sample.get();
                let gauge = format!("width: {:.1}%", current.gauge_percent());
                view! {
                    <div class="card">
                        <h3 class="card__title">{health_title(service.get())}</h3>
                        <StatusChip label=health_label(current.health) tone=current.health.tone() />
                    </div>
                    <div class="card">
                        <h3 class="card__title">{format!("Latency: {}ms", current.latency_ms)}</h3>
                        <div
                            class="gauge"
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax=LATENCY_GAUGE_MAX_MS.to_string()
                            aria-valuenow=current.latency_ms.to_string()
                        >
                            <div class=gauge_fill_class(current.health) style=gauge></div>
                        </div>
                    </div>
                    <div class="card">
                        <h3 class="card__title">"Recent Logs"</h3>
                        <ul class="log-list">
                            {current
                                .logs
                                .into_iter()
                                .map(|line| {
                                    let level = LogLevel::classify(&line);
                                    view! { <li class=format!("log-line log-line--{}", level.as_str())>{line}</li> }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                }
            }}
        </section>
    }
}
