//! Pair lookup handlers: by token, by DEX, by address, trending and movers.
//!
//! Every handler builds one [`UpstreamRequest`], forwards it, and (except
//! for the single-pair lookup) truncates the returned `pairs` list.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::forward_truncated;
use crate::api::dto::{LimitParams, MoversParams, TrendingParams};
use crate::app_state::AppState;
use crate::domain::{Mover, UpstreamPeriod, UpstreamRequest};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /pairs/token/{token_address}` — Pairs containing a token.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed parameters or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/token/{token_address}",
    tag = "Pairs",
    summary = "Pairs by token address",
    description = "Searches DEX pairs that contain the given token address.",
    params(
        ("token_address" = String, Path, description = "Token contract address"),
        LimitParams,
    ),
    responses(
        (status = 200, description = "Matching pairs", body = serde_json::Value),
        (status = 400, description = "Upstream rejected the request", body = ErrorResponse),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
        (status = 500, description = "Upstream unreachable", body = ErrorResponse),
    )
)]
pub async fn pairs_by_token(
    State(state): State<AppState>,
    token_address: Result<Path<String>, PathRejection>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    let Path(token_address) = token_address?;
    let Query(params) = params?;
    forward_truncated(&state, &UpstreamRequest::search(&token_address), params.limit).await
}

/// `GET /pairs/dex/{dex_id}/{token_address}` — Pairs of a token on one DEX.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed parameters or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/dex/{dex_id}/{token_address}",
    tag = "Pairs",
    summary = "Pairs by DEX and token",
    description = "Returns pairs for a token address on a specific DEX (e.g. `uniswap`, `pancakeswap`).",
    params(
        ("dex_id" = String, Path, description = "DEX identifier"),
        ("token_address" = String, Path, description = "Token contract address"),
        LimitParams,
    ),
    responses(
        (status = 200, description = "Matching pairs", body = serde_json::Value),
        (status = 400, description = "Upstream rejected the request", body = ErrorResponse),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn pairs_by_dex_and_token(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    let Path((dex_id, token_address)) = path?;
    let Query(params) = params?;
    let req = UpstreamRequest::dex_pairs(&dex_id, Some(&token_address));
    forward_truncated(&state, &req, params.limit).await
}

/// `GET /pairs/dex/{dex_id}` — All pairs of one DEX.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed parameters or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/dex/{dex_id}",
    tag = "Pairs",
    summary = "Pairs by DEX",
    params(
        ("dex_id" = String, Path, description = "DEX identifier"),
        LimitParams,
    ),
    responses(
        (status = 200, description = "Pairs listed on the DEX", body = serde_json::Value),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn pairs_by_dex(
    State(state): State<AppState>,
    dex_id: Result<Path<String>, PathRejection>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    let Path(dex_id) = dex_id?;
    let Query(params) = params?;
    forward_truncated(&state, &UpstreamRequest::dex_pairs(&dex_id, None), params.limit).await
}

/// `GET /pairs/address/{pair_address}` — Single pair details.
///
/// The upstream payload is returned as-is; no truncation applies.
///
/// # Errors
///
/// Returns [`GatewayError`] on a malformed address or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/address/{pair_address}",
    tag = "Pairs",
    summary = "Pair by address",
    description = "Returns detailed information about a trading pair.",
    params(
        ("pair_address" = String, Path, description = "Pair contract address"),
    ),
    responses(
        (status = 200, description = "Pair details", body = serde_json::Value),
        (status = 400, description = "Upstream rejected the request", body = ErrorResponse),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn pair_by_address(
    State(state): State<AppState>,
    pair_address: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, GatewayError> {
    let Path(pair_address) = pair_address?;
    let payload = state
        .upstream
        .forward(&UpstreamRequest::pair(&pair_address))
        .await?;
    Ok(Json(payload))
}

/// `GET /pairs/trending` — Currently trending pairs.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed parameters or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/trending",
    tag = "Pairs",
    summary = "Trending pairs",
    description = "Returns trending pairs, optionally restricted to one chain.",
    params(TrendingParams),
    responses(
        (status = 200, description = "Trending pairs", body = serde_json::Value),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn trending_pairs(
    State(state): State<AppState>,
    params: Result<Query<TrendingParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    let Query(params) = params?;
    let req = UpstreamRequest::trending(params.chain.as_deref());
    forward_truncated(&state, &req, params.limit).await
}

/// `GET /pairs/gainers` — Top gaining pairs for a period.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed parameters or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/gainers",
    tag = "Pairs",
    summary = "Top gainers",
    description = "Returns the pairs with the largest price increase. Unknown periods fall back to 24h.",
    params(MoversParams),
    responses(
        (status = 200, description = "Top gaining pairs", body = serde_json::Value),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn top_gainers(
    State(state): State<AppState>,
    params: Result<Query<MoversParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    movers(&state, Mover::Gainers, params?.0).await
}

/// `GET /pairs/losers` — Top losing pairs for a period.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed parameters or upstream failure.
#[utoipa::path(
    get,
    path = "/pairs/losers",
    tag = "Pairs",
    summary = "Top losers",
    description = "Returns the pairs with the largest price decrease. Unknown periods fall back to 24h.",
    params(MoversParams),
    responses(
        (status = 200, description = "Top losing pairs", body = serde_json::Value),
        (status = 429, description = "Upstream rate limit", body = ErrorResponse),
    )
)]
pub async fn top_losers(
    State(state): State<AppState>,
    params: Result<Query<MoversParams>, QueryRejection>,
) -> Result<Json<Value>, GatewayError> {
    movers(&state, Mover::Losers, params?.0).await
}

async fn movers(
    state: &AppState,
    mover: Mover,
    params: MoversParams,
) -> Result<Json<Value>, GatewayError> {
    let period = UpstreamPeriod::from_alias(&params.period);
    let req = UpstreamRequest::movers(mover, period, params.chain.as_deref());
    forward_truncated(state, &req, params.limit).await
}

/// Pair routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pairs/token/{token_address}", get(pairs_by_token))
        .route("/pairs/dex/{dex_id}/{token_address}", get(pairs_by_dex_and_token))
        .route("/pairs/dex/{dex_id}", get(pairs_by_dex))
        .route("/pairs/address/{pair_address}", get(pair_by_address))
        .route("/pairs/trending", get(trending_pairs))
        .route("/pairs/gainers", get(top_gainers))
        .route("/pairs/losers", get(top_losers))
}
