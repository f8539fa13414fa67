//! # client
//!
//! Leptos + WASM frontend for the `CloudOps` Copilot dashboard.
//!
//! This crate contains the dashboard page, the four tabbed panels, the chat
//! widget, UI state, and the deployment feed client. Panel data comes from
//! the mock sources in `ops`; only the live feed crosses the network.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
