//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `feed_client` manages the deployment feed websocket lifecycle. Panel data
//! is local, so there is no REST client.

pub mod feed_client;
