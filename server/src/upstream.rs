//! HTTP client for the external activities service.
//!
//! DESIGN
//! ======
//! The host does not interpret activity payloads. Status, content type, and
//! body bytes are passed back verbatim so the browser client sees exactly
//! what the service answered. Only transport failures are turned into a
//! local `502` with a `{detail}` body the client already knows how to show.

use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Detail text returned when the activities service cannot be reached.
pub const UNAVAILABLE_DETAIL: &str = "Activities service unavailable";

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while talking to the activities service.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or timed out.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": UNAVAILABLE_DETAIL }))).into_response()
    }
}

/// A response from the activities service, relayed as-is.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// # Errors
    ///
    /// Returns `HttpClientBuild` if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute upstream URL for `path`, with an already-encoded query.
    pub fn url(&self, path: &str, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{path}?{query}", self.base_url),
            None => format!("{}{path}", self.base_url),
        }
    }

    /// Send one request and collect the whole reply.
    ///
    /// # Errors
    ///
    /// Returns `Request` if the service is unreachable or times out and
    /// `Body` if the reply body cannot be read. Non-2xx statuses are not
    /// errors here.
    pub async fn send(&self, method: Method, path: &str, query: Option<&str>) -> Result<UpstreamReply, UpstreamError> {
        let url = self.url(path, query);
        let resp = self
            .http
            .request(method, &url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = resp.status();
        let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
        let body = resp.bytes().await.map_err(|e| UpstreamError::Body(e.to_string()))?;
        Ok(UpstreamReply { status, content_type, body })
    }
}

/// Upstream path for a per-activity action, with the name percent-encoded.
pub fn activity_action_path(activity: &str, action: &str) -> String {
    format!("/activities/{}/{action}", urlencoding::encode(activity))
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
