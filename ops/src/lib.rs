//! Shared operations model for the `CloudOps` Copilot dashboard.
//!
//! This crate owns the service catalog and every mock data source the
//! dashboard panels render: deployment records, observability samples, the
//! RCA template, the deployment trigger advisory, and the chat copilot. It is
//! compiled natively for `server` and to WASM for `client`.
//!
//! DESIGN
//! ======
//! Nothing here reads the wall clock or an OS entropy source. Callers pass
//! `now` timestamps and a `rand::Rng`, so the same code runs in the browser
//! and under `cargo test`.

pub mod catalog;
pub mod clock;
pub mod copilot;
pub mod deployment;
pub mod error;
pub mod feed;
pub mod observability;
pub mod rca;
pub mod trigger;

pub use catalog::{Environment, HealthStatus, Service, Tone};
pub use error::OpsError;
