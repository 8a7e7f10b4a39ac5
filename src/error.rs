//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and a JSON `{"detail": ...}` body.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Number of upstream body characters kept in an unexpected-status detail.
pub const UPSTREAM_DETAIL_CHARS: usize = 200;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "detail": "Rate limit exceeded. Please try again later." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub detail: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant                    | HTTP Status                   |
/// |----------------------------|-------------------------------|
/// | `BadUpstreamRequest`       | 400 Bad Request               |
/// | `RateLimited`              | 429 Too Many Requests         |
/// | `UnexpectedUpstreamStatus` | the upstream's own status     |
/// | `Connection`               | 500 Internal Server Error     |
/// | `InvalidParams`            | 422 Unprocessable Entity      |
/// | `NotFound`                 | 404 Not Found                 |
/// | `Internal`                 | 500 Internal Server Error     |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Upstream rejected the request shape (HTTP 400). Carries the raw body.
    #[error("Bad Request: {0}")]
    BadUpstreamRequest(String),

    /// Upstream is throttling us (HTTP 429).
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Upstream answered with any other non-200 status.
    #[error("Unexpected Error: {detail}")]
    UnexpectedUpstreamStatus {
        /// Status code returned by the upstream.
        status: StatusCode,
        /// Leading part of the upstream body.
        detail: String,
    },

    /// The upstream could not be reached or the exchange broke mid-way.
    #[error("Connection Error: {0}")]
    Connection(String),

    /// Inbound query or path parameters failed to parse.
    #[error("{0}")]
    InvalidParams(String),

    /// No route matches the request.
    #[error("Not Found")]
    NotFound,

    /// Failure the forwarding policy does not classify, e.g. a 200 response
    /// whose body is not JSON.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Builds an [`GatewayError::UnexpectedUpstreamStatus`], keeping only the
    /// first [`UPSTREAM_DETAIL_CHARS`] characters of `body`.
    #[must_use]
    pub fn unexpected_status(status: StatusCode, body: &str) -> Self {
        Self::UnexpectedUpstreamStatus {
            status,
            detail: body.chars().take(UPSTREAM_DETAIL_CHARS).collect(),
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadUpstreamRequest(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::UnexpectedUpstreamStatus { status, .. } => *status,
            Self::InvalidParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Connection(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    /// Transport failures keep their full source chain so the detail names
    /// the underlying cause (refused connection, DNS failure, ...).
    fn from(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        Self::Connection(message)
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidParams(rejection.body_text())
    }
}

impl From<PathRejection> for GatewayError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidParams(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            GatewayError::BadUpstreamRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            GatewayError::unexpected_status(StatusCode::BAD_GATEWAY, "down").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::Connection("refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::InvalidParams("bad limit".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(GatewayError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unexpected_status_keeps_first_200_chars() {
        let body = "é".repeat(500);
        let err = GatewayError::unexpected_status(StatusCode::SERVICE_UNAVAILABLE, &body);
        let GatewayError::UnexpectedUpstreamStatus { detail, .. } = err else {
            panic!("expected UnexpectedUpstreamStatus");
        };
        assert_eq!(detail.chars().count(), UPSTREAM_DETAIL_CHARS);
    }

    #[test]
    fn rate_limit_message_is_fixed() {
        assert_eq!(
            GatewayError::RateLimited.to_string(),
            "Rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn bad_request_detail_carries_body() {
        let err = GatewayError::BadUpstreamRequest("bad param".into());
        assert!(err.to_string().contains("bad param"));
    }
}
