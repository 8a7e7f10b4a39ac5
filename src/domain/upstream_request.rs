//! Translation of inbound route parameters into upstream requests.
//!
//! Each constructor corresponds to one row of the gateway's route table.
//! Path segments are inserted as given; the upstream owns their validation.

use super::period::UpstreamPeriod;

/// Direction of a price-movers listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    /// Pairs with the largest price increase.
    Gainers,
    /// Pairs with the largest price decrease.
    Losers,
}

impl Mover {
    const fn segment(self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Losers => "losers",
        }
    }
}

/// A GET request against the upstream API, relative to its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    /// Endpoint path appended to the base URL (starts with `/`).
    pub path: String,
    /// Query string parameters.
    pub query: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    fn at(path: String) -> Self {
        Self {
            path,
            query: Vec::new(),
        }
    }

    /// `/dex/search?q={query}`.
    #[must_use]
    pub fn search(query: &str) -> Self {
        Self {
            path: "/dex/search".to_string(),
            query: vec![("q", query.to_string())],
        }
    }

    /// `/dex/pairs/{dex_id}` or `/dex/pairs/{dex_id}/{token_address}`.
    #[must_use]
    pub fn dex_pairs(dex_id: &str, token_address: Option<&str>) -> Self {
        match token_address {
            Some(token) => Self::at(format!("/dex/pairs/{dex_id}/{token}")),
            None => Self::at(format!("/dex/pairs/{dex_id}")),
        }
    }

    /// `/dex/pairs/{pair_address}`.
    #[must_use]
    pub fn pair(pair_address: &str) -> Self {
        Self::at(format!("/dex/pairs/{pair_address}"))
    }

    /// `/dex/pairs/trending`, suffixed with `/{chain}` when a chain is given.
    #[must_use]
    pub fn trending(chain: Option<&str>) -> Self {
        with_chain("/dex/pairs/trending".to_string(), chain)
    }

    /// `/dex/{gainers|losers}/{period}`, suffixed with `/{chain}` when a
    /// chain is given.
    #[must_use]
    pub fn movers(mover: Mover, period: UpstreamPeriod, chain: Option<&str>) -> Self {
        with_chain(format!("/dex/{}/{period}", mover.segment()), chain)
    }
}

fn with_chain(base: String, chain: Option<&str>) -> UpstreamRequest {
    match chain.filter(|c| !c.is_empty()) {
        Some(chain) => UpstreamRequest::at(format!("{base}/{chain}")),
        None => UpstreamRequest::at(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_passes_term_as_query() {
        let req = UpstreamRequest::search("PEPE");
        assert_eq!(req.path, "/dex/search");
        assert_eq!(req.query, vec![("q", "PEPE".to_string())]);
    }

    #[test]
    fn dex_pairs_with_and_without_token() {
        assert_eq!(
            UpstreamRequest::dex_pairs("uniswap", Some("0xabc")).path,
            "/dex/pairs/uniswap/0xabc"
        );
        assert_eq!(
            UpstreamRequest::dex_pairs("uniswap", None).path,
            "/dex/pairs/uniswap"
        );
    }

    #[test]
    fn pair_by_address() {
        let req = UpstreamRequest::pair("0xdef");
        assert_eq!(req.path, "/dex/pairs/0xdef");
        assert!(req.query.is_empty());
    }

    #[test]
    fn trending_chain_suffix() {
        assert_eq!(UpstreamRequest::trending(None).path, "/dex/pairs/trending");
        assert_eq!(
            UpstreamRequest::trending(Some("ethereum")).path,
            "/dex/pairs/trending/ethereum"
        );
    }

    #[test]
    fn empty_chain_counts_as_absent() {
        assert_eq!(UpstreamRequest::trending(Some("")).path, "/dex/pairs/trending");
    }

    #[test]
    fn movers_use_mapped_period() {
        assert_eq!(
            UpstreamRequest::movers(Mover::Gainers, UpstreamPeriod::from_alias("1d"), None).path,
            "/dex/gainers/h24"
        );
        assert_eq!(
            UpstreamRequest::movers(Mover::Losers, UpstreamPeriod::D7, Some("bsc")).path,
            "/dex/losers/d7/bsc"
        );
    }
}
