//! Responses produced by the gateway itself, without forwarding.

use serde::Serialize;
use utoipa::ToSchema;

/// `GET /` payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed liveness message.
    pub message: String,
    /// Gateway version.
    pub version: String,
}

/// `GET /chains` payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChainsResponse {
    /// Supported chain identifiers, in a stable order.
    pub chains: Vec<String>,
}
