//! Service layer: the forwarding helper every route handler delegates to.
//!
//! [`DexScreenerClient`] issues one upstream GET per call and classifies
//! the response into a payload or a [`super::error::GatewayError`].

pub mod dexscreener;

pub use dexscreener::{DEFAULT_BASE_URL, DexScreenerClient, classify_response};
