//! Period tokens for the upstream gainers/losers endpoints.

use std::fmt;

/// Time window understood by the upstream movers endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpstreamPeriod {
    /// One hour (`h1`).
    H1,
    /// Six hours (`h6`).
    H6,
    /// Twenty-four hours (`h24`).
    #[default]
    H24,
    /// Seven days (`d7`).
    D7,
    /// Thirty days (`d30`).
    D30,
}

impl UpstreamPeriod {
    /// Maps a client-facing alias (`1h`, `6h`, `24h`, `1d`, `7d`, `30d`) to
    /// the upstream period. Anything else falls back to [`Self::H24`].
    #[must_use]
    pub fn from_alias(alias: &str) -> Self {
        match alias {
            "1h" => Self::H1,
            "6h" => Self::H6,
            "24h" | "1d" => Self::H24,
            "7d" => Self::D7,
            "30d" => Self::D30,
            _ => Self::default(),
        }
    }

    /// Upstream path token for this period.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H6 => "h6",
            Self::H24 => "h24",
            Self::D7 => "d7",
            Self::D30 => "d30",
        }
    }
}

impl fmt::Display for UpstreamPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases_map_to_upstream_tokens() {
        let cases = [
            ("1h", "h1"),
            ("6h", "h6"),
            ("24h", "h24"),
            ("1d", "h24"),
            ("7d", "d7"),
            ("30d", "d30"),
        ];
        for (alias, token) in cases {
            assert_eq!(UpstreamPeriod::from_alias(alias).as_str(), token, "{alias}");
        }
    }

    #[test]
    fn unknown_alias_falls_back_to_h24() {
        for alias in ["", "2h", "1w", "H1", "h1", "1D"] {
            assert_eq!(UpstreamPeriod::from_alias(alias), UpstreamPeriod::H24);
        }
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(UpstreamPeriod::D30.to_string(), "d30");
    }
}
