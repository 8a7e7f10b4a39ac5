//! Chains advertised by `GET /chains`.
//!
//! The list is informational only; `chain` parameters on other routes are
//! forwarded to the upstream without being checked against it.

/// Chain identifiers in the order they are reported to clients.
pub const SUPPORTED_CHAINS: [&str; 24] = [
    "ethereum",
    "bsc",
    "polygon",
    "avalanche",
    "fantom",
    "arbitrum",
    "celo",
    "harmony",
    "cronos",
    "optimism",
    "moonriver",
    "moonbeam",
    "metis",
    "aurora",
    "kava",
    "base",
    "linea",
    "mantle",
    "zksync",
    "scroll",
    "bnbchain",
    "solana",
    "polygon_zkevm",
    "arbitrum_nova",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chain_ids_are_unique() {
        let unique: HashSet<_> = SUPPORTED_CHAINS.iter().collect();
        assert_eq!(unique.len(), SUPPORTED_CHAINS.len());
    }

    #[test]
    fn order_starts_with_ethereum_and_ends_with_arbitrum_nova() {
        assert_eq!(SUPPORTED_CHAINS.first(), Some(&"ethereum"));
        assert_eq!(SUPPORTED_CHAINS.last(), Some(&"arbitrum_nova"));
    }
}
