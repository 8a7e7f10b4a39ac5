//! Free-text pair search.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::api::dto::SearchParams;
use crate::app_state::AppState;
use crate::domain::UpstreamRequest;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /search` — Search pairs by token name or symbol.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidParams`] when `query` is missing, or the
/// upstream classification error.
#[utoipa::path(
    get,
    path = "/search",
    tag = "Search",
    summary = "Search pairs",
    description = "Searches pairs by token name, symbol or address and returns at most `limit` of them.",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching pairs", body = serde_json::Value),
        (status = 422, description = "Missing or malformed query parameters", body = ErrorResponse),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn search_pairs(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    let Query(params) = params?;
    super::forward_truncated(&state, &UpstreamRequest::search(&params.query), params.limit).await
}

/// Search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search_pairs))
}
