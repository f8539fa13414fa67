//! Full-width tab strip switching the active dashboard panel.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| ui.get().active_tab);

    view! {
        <div class="tabs" role="tablist" aria-label="navigation tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || active.get() == tab;
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=is_active
                            role="tab"
                            id=tab.tab_id()
                            aria-controls=tab.panel_id()
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
