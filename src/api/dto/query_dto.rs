//! Query string parameters accepted by the list routes.

use serde::Deserialize;
use utoipa::IntoParams;

/// Number of pairs returned when `limit` is not given.
pub const DEFAULT_LIMIT: i64 = 10;

/// Period alias used when `period` is not given.
pub const DEFAULT_PERIOD: &str = "1d";

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn default_period() -> String {
    DEFAULT_PERIOD.to_string()
}

/// `?limit=` on routes that only truncate.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    /// Number of results to return (max 100).
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

/// `GET /search` parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Token name or symbol to search for.
    pub query: String,
    /// Number of results to return (max 100).
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

/// `GET /pairs/trending` parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingParams {
    /// Chain filter (e.g. `ethereum`, `bsc`).
    pub chain: Option<String>,
    /// Number of results to return (max 100).
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

/// `GET /pairs/gainers` and `GET /pairs/losers` parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MoversParams {
    /// Chain filter (e.g. `ethereum`, `bsc`).
    pub chain: Option<String>,
    /// Time period (`1h`, `6h`, `24h`, `1d`, `7d`, `30d`).
    #[serde(default = "default_period")]
    #[param(default = "1d")]
    pub period: String,
    /// Number of results to return (max 100).
    #[serde(default = "default_limit")]
    #[param(default = 10)]
    pub limit: i64,
}
