//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `sync` applies their results to shared
//! state, and `types` defines the wire schema.

pub mod api;
pub mod sync;
pub mod types;
