//! Single-page dashboard: header, tab strip, active panel, chat widget.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::deployment_dashboard::DeploymentDashboard;
use crate::components::observability_panel::ObservabilityPanel;
use crate::components::rca_view::RcaView;
use crate::components::tab_bar::TabBar;
use crate::components::trigger_panel::TriggerPanel;
use crate::state::ui::{Tab, UiState};

/// Only the active panel is mounted, so switching tabs resets panel state.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| ui.get().active_tab);

    view! {
        <div class="dashboard">
            <header class="app-bar">
                <h1 class="app-bar__title">"CloudOps Copilot"</h1>
            </header>
            <main class="dashboard__body">
                <TabBar />
                {move || match active.get() {
                    Tab::Observability => view! { <ObservabilityPanel /> }.into_any(),
                    Tab::Deployment => view! { <DeploymentDashboard /> }.into_any(),
                    Tab::Rca => view! { <RcaView /> }.into_any(),
                    Tab::Trigger => view! { <TriggerPanel /> }.into_any(),
                }}
            </main>
            <ChatWidget />
        </div>
    }
}
