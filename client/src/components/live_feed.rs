//! Live deployment feed strip fed by the `/ws/deploy` connection.

#[cfg(test)]
#[path = "live_feed_test.rs"]
mod live_feed_test;

use leptos::prelude::*;
use ops::clock::format_timestamp_ms;
use ops::Tone;

use crate::components::status_chip::StatusChip;
use crate::state::feed::{ConnectionStatus, FeedState};

fn connection_tone(status: ConnectionStatus) -> Tone {
    match status {
        ConnectionStatus::Connected => Tone::Success,
        ConnectionStatus::Connecting => Tone::Warning,
        ConnectionStatus::Disconnected => Tone::Neutral,
    }
}

#[component]
pub fn LiveFeedStrip() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    view! {
        <div class="live-feed">
            <span class="live-feed__title">"Live feed"</span>
            {move || {
                let status = feed.get().connection_status;
                view! { <StatusChip label=status.label() tone=connection_tone(status) small=true /> }
            }}
            {move || {
                let state = feed.get();
                match state.latest {
                    Some(event) => {
                        let stamp = format_timestamp_ms(event.timestamp.saturating_mul(1_000));
                        view! {
                            <span class="live-feed__event">
                                <strong>{event.service.as_str()}</strong>
                                " in "
                                {event.environment.as_str()}
                                " · "
                                {stamp}
                            </span>
                            <StatusChip label=event.status.as_str() tone=event.status.tone() small=true />
                            <span class="live-feed__count">{format!("{} events", state.received)}</span>
                        }
                            .into_any()
                    }
                    None => view! { <span class="live-feed__empty">"Waiting for events..."</span> }.into_any(),
                }
            }}
        </div>
    }
}
