//! Local UI chrome state (active tab, chat widget visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`, `feed`)
//! so rendering controls can evolve independently of data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dashboard tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Observability,
    Deployment,
    Rca,
    Trigger,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Observability, Tab::Deployment, Tab::Rca, Tab::Trigger];

    /// Tab strip caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Observability => "📊 Observability",
            Self::Deployment => "🚀 Deployment",
            Self::Rca => "🧠 RCA",
            Self::Trigger => "⚙️ Trigger",
        }
    }

    /// Position in the tab strip.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Observability => 0,
            Self::Deployment => 1,
            Self::Rca => 2,
            Self::Trigger => 3,
        }
    }

    /// DOM id of the tab button.
    #[must_use]
    pub fn tab_id(self) -> String {
        format!("tab-{}", self.index())
    }

    /// DOM id of the panel the tab controls.
    #[must_use]
    pub fn panel_id(self) -> String {
        format!("tabpanel-{}", self.index())
    }
}

/// UI state for tabs and the floating chat widget.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub chat_open: bool,
}
