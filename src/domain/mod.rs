//! Domain layer: request-shaping constants and pure translation rules.
//!
//! Nothing here performs I/O. This module holds the period alias map, the
//! supported chain list, the `pairs` truncation rule, and the table that
//! turns inbound route parameters into upstream requests.

pub mod chain;
pub mod pairs;
pub mod period;
pub mod upstream_request;

pub use chain::SUPPORTED_CHAINS;
pub use pairs::{MAX_PAIRS, truncate_pairs};
pub use period::UpstreamPeriod;
pub use upstream_request::{Mover, UpstreamRequest};
