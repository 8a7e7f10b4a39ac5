//! REST endpoint handlers organized by resource.

pub mod pairs;
pub mod search;
pub mod system;

use axum::Json;
use axum::Router;
use serde_json::Value;

use crate::app_state::AppState;
use crate::domain::{UpstreamRequest, truncate_pairs};
use crate::error::GatewayError;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pairs::routes())
        .merge(search::routes())
        .merge(system::routes())
}

/// Forwards `req` and truncates the `pairs` list of the result to `limit`.
async fn forward_truncated(
    state: &AppState,
    req: &UpstreamRequest,
    limit: i64,
) -> Result<Json<Value>, GatewayError> {
    let payload = state.upstream.forward(req).await?;
    Ok(Json(truncate_pairs(payload, limit)))
}
