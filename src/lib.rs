//! # dexscreener-gateway
//!
//! REST gateway that republishes the DexScreener DEX data API under a
//! simplified set of routes.
//!
//! Each inbound request is translated into exactly one upstream GET. The
//! upstream status is classified into a small error taxonomy and list
//! results are truncated to the requested `limit` (at most 100). The
//! gateway holds no state beyond an HTTP client.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── Route table, period map, truncation (domain/)
//!     │
//!     ├── DexScreenerClient (service/)
//!     │
//!     └── DexScreener API
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the fully layered application router for `state`.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
