//! Top-level routed pages.

pub mod dashboard;
