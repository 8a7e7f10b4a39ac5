//! System endpoints: health check and supported chains.

use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ChainsResponse, HealthResponse};
use crate::app_state::AppState;
use crate::domain::SUPPORTED_CHAINS;
use crate::error::GatewayError;

/// Liveness message returned by `GET /`.
pub const HEALTH_MESSAGE: &str = "DexScreener API is running!";

/// `GET /` — Service health status.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Health check",
    description = "Returns a fixed liveness message and the gateway version.",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /chains` — List supported chains.
#[utoipa::path(
    get,
    path = "/chains",
    tag = "System",
    summary = "List supported chains",
    description = "Returns the fixed list of chain identifiers. Does not contact the upstream.",
    responses(
        (status = 200, description = "Chain catalog", body = ChainsResponse),
    )
)]
pub async fn chains_handler() -> Json<ChainsResponse> {
    Json(ChainsResponse {
        chains: SUPPORTED_CHAINS.iter().map(ToString::to_string).collect(),
    })
}

/// Fallback for unmatched routes: `404 {"detail": "Not Found"}`.
pub async fn not_found() -> GatewayError {
    GatewayError::NotFound
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/chains", get(chains_handler))
}
