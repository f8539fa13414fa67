//! Outlined status chip colored by tone.

#[cfg(test)]
#[path = "status_chip_test.rs"]
mod status_chip_test;

use leptos::prelude::*;
use ops::Tone;

#[component]
pub fn StatusChip(
    #[prop(into)] label: String,
    tone: Tone,
    #[prop(optional)] small: bool,
) -> impl IntoView {
    let class = chip_class(tone, small);
    view! { <span class=class>{label}</span> }
}

fn chip_class(tone: Tone, small: bool) -> String {
    let size = if small { " chip--small" } else { "" };
    format!("chip chip--{}{size}", tone.as_str())
}
