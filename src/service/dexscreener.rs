//! DexScreener forwarding client.

use axum::http::StatusCode;
use serde_json::Value;

use crate::domain::UpstreamRequest;
use crate::error::{GatewayError, UPSTREAM_DETAIL_CHARS};

/// Public DexScreener API root.
pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com/latest";

/// Thin wrapper over [`reqwest::Client`] bound to one upstream base URL.
///
/// Holds no mutable state. Every [`forward`](Self::forward) call is a single
/// GET with library-default headers and no timeout override.
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    http: reqwest::Client,
    base_url: String,
}

impl DexScreenerClient {
    /// Creates a client for `base_url`. A trailing `/` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// initialised (e.g. no TLS backend is available).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Internal(format!("http client init failed: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Returns the upstream base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `req` to the upstream and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Connection`] when the upstream cannot be reached or
    ///   the body cannot be read.
    /// - Any error produced by [`classify_response`] for non-200 statuses or
    ///   non-JSON bodies.
    pub async fn forward(&self, req: &UpstreamRequest) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.base_url, req.path);
        tracing::debug!(%url, query = ?req.query, "forwarding upstream request");

        let response = self
            .http
            .get(&url)
            .query(&req.query)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "upstream unreachable"))?;

        let status = response.status().as_u16();
        tracing::info!(%url, status, "upstream responded");

        let body = response
            .text()
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "failed reading upstream body"))?;

        classify_response(status, &body)
    }
}

/// Maps an upstream status and body onto the gateway's outcome.
///
/// | Status    | Outcome                                           |
/// |-----------|---------------------------------------------------|
/// | 200       | body parsed as JSON, or `Internal` if it is not   |
/// | 400       | `BadUpstreamRequest` carrying the raw body        |
/// | 429       | `RateLimited`, body ignored                       |
/// | otherwise | `UnexpectedUpstreamStatus` with a truncated body  |
///
/// # Errors
///
/// Returns a [`GatewayError`] for every status other than 200 and for a
/// 200 whose body is not valid JSON.
pub fn classify_response(status: u16, body: &str) -> Result<Value, GatewayError> {
    let excerpt = log_excerpt(body);
    match status {
        200 => serde_json::from_str(body).map_err(|e| {
            tracing::warn!(error = %e, "upstream returned malformed JSON");
            GatewayError::Internal(format!("malformed upstream JSON: {e}"))
        }),
        400 => {
            tracing::warn!(body = %excerpt, "upstream rejected request");
            Err(GatewayError::BadUpstreamRequest(body.to_string()))
        }
        429 => {
            tracing::warn!(body = %excerpt, "upstream rate limit hit");
            Err(GatewayError::RateLimited)
        }
        other => {
            tracing::warn!(status = other, body = %excerpt, "unexpected upstream status");
            let status = StatusCode::from_u16(other).unwrap_or(StatusCode::BAD_GATEWAY);
            Err(GatewayError::unexpected_status(status, body))
        }
    }
}

/// Leading part of an upstream body, for log lines.
fn log_excerpt(body: &str) -> &str {
    body.char_indices()
        .nth(UPSTREAM_DETAIL_CHARS)
        .map_or(body, |(end, _)| body.get(..end).unwrap_or(body))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_excerpt_is_bounded() {
        let long = "é".repeat(1_000);
        assert_eq!(log_excerpt(&long).chars().count(), UPSTREAM_DETAIL_CHARS);
        assert_eq!(log_excerpt("short body"), "short body");
    }

    #[test]
    fn ok_body_is_parsed() {
        let Ok(value) = classify_response(200, r#"{"pairs":[]}"#) else {
            panic!("expected success");
        };
        assert_eq!(value, json!({ "pairs": [] }));
    }

    #[test]
    fn ok_with_malformed_json_is_internal() {
        let result = classify_response(200, "<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::Internal(_))));
    }

    #[test]
    fn bad_request_keeps_body() {
        let Err(GatewayError::BadUpstreamRequest(detail)) = classify_response(400, "bad param")
        else {
            panic!("expected BadUpstreamRequest");
        };
        assert_eq!(detail, "bad param");
    }

    #[test]
    fn rate_limited_ignores_body() {
        let result = classify_response(429, "slow down please");
        assert!(matches!(result, Err(GatewayError::RateLimited)));
    }

    #[test]
    fn other_status_is_passed_through_with_truncated_detail() {
        let body = "x".repeat(1_000);
        let Err(err) = classify_response(503, &body) else {
            panic!("expected error");
        };
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let GatewayError::UnexpectedUpstreamStatus { detail, .. } = err else {
            panic!("expected UnexpectedUpstreamStatus");
        };
        assert_eq!(detail.len(), 200);
    }

    #[test]
    fn non_200_success_status_is_unexpected() {
        let Err(err) = classify_response(204, "") else {
            panic!("expected error");
        };
        assert!(matches!(err, GatewayError::UnexpectedUpstreamStatus { .. }));
        assert_eq!(err.status_code(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let Ok(client) = DexScreenerClient::new("http://localhost:9000/latest/") else {
            panic!("client init failed");
        };
        assert_eq!(client.base_url(), "http://localhost:9000/latest");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_connection_error() {
        let Ok(client) = DexScreenerClient::new("http://127.0.0.1:1") else {
            panic!("client init failed");
        };
        let result = client.forward(&UpstreamRequest::pair("0xabc")).await;
        let Err(err) = result else {
            panic!("expected connection failure");
        };
        assert!(matches!(err, GatewayError::Connection(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
