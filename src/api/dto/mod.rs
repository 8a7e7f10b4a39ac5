//! Data Transfer Objects for REST request/response serialization.
//!
//! Upstream payloads are forwarded as opaque JSON, so only query
//! parameters and the locally produced responses have types here.

pub mod query_dto;
pub mod system_dto;

pub use query_dto::*;
pub use system_dto::*;
