//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard panels and chrome. Panels own their form
//! and dataset state locally; only the tab bar, chat widget, and live feed
//! strip read shared state from Leptos context providers.

pub mod chat_widget;
pub mod deployment_dashboard;
pub mod live_feed;
pub mod observability_panel;
pub mod rca_view;
pub mod selectors;
pub mod status_chip;
pub mod tab_bar;
pub mod trigger_panel;
