//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The host keeps no activity data of its own; it only holds the client for
//! the external activities service.

use crate::upstream::UpstreamClient;

/// Clone is required by Axum; `reqwest::Client` is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}
