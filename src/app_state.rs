//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::DexScreenerClient;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Forwarding client for the upstream DexScreener API.
    pub upstream: Arc<DexScreenerClient>,
}

impl AppState {
    /// Wraps `upstream` for sharing across handlers.
    #[must_use]
    pub fn new(upstream: DexScreenerClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}
