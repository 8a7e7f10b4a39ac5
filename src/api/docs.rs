//! OpenAPI documentation for the REST API.

use utoipa::OpenApi;

use crate::api::{dto, handlers};
use crate::error::ErrorResponse;

/// OpenAPI documentation for the REST API.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::system::health_handler,
        handlers::system::chains_handler,
        handlers::pairs::pairs_by_token,
        handlers::pairs::pairs_by_dex_and_token,
        handlers::pairs::pairs_by_dex,
        handlers::pairs::pair_by_address,
        handlers::pairs::trending_pairs,
        handlers::pairs::top_gainers,
        handlers::pairs::top_losers,
        handlers::search::search_pairs,
    ),
    components(schemas(dto::HealthResponse, dto::ChainsResponse, ErrorResponse)),
    tags(
        (name = "System", description = "Health and static catalogs"),
        (name = "Pairs", description = "DEX pair lookups"),
        (name = "Search", description = "Free-text pair search"),
    ),
    info(
        title = "DexScreener API",
        description = "API for retrieving DeFi data including DEX pairs, tokens, and market information",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/",
            "/chains",
            "/search",
            "/pairs/token/{token_address}",
            "/pairs/dex/{dex_id}/{token_address}",
            "/pairs/dex/{dex_id}",
            "/pairs/address/{pair_address}",
            "/pairs/trending",
            "/pairs/gainers",
            "/pairs/losers",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
