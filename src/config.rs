//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable               | Default                              |
//! |------------------------|--------------------------------------|
//! | `PORT`                 | `8086`                               |
//! | `DEXSCREENER_BASE_URL` | `https://api.dexscreener.com/latest` |

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;

use crate::service::DEFAULT_BASE_URL;

/// Port the gateway listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8086;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (always `0.0.0.0:<PORT>`).
    pub listen_addr: SocketAddr,

    /// Root URL of the upstream DexScreener API, without trailing slash.
    pub upstream_base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is present but cannot be parsed as `u16`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let upstream_base_url = lookup("DEXSCREENER_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(
                || DEFAULT_BASE_URL.to_string(),
                |v| v.trim().trim_end_matches('/').to_string(),
            );

        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            upstream_base_url,
        })
    }
}
