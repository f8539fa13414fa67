//! Client state models shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each model is wrapped in an `RwSignal` by `App`. Panels that only need
//! local form state keep it in component-scoped signals instead.

pub mod chat;
pub mod feed;
pub mod ui;
