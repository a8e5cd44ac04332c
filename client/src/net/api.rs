//! REST API helpers for the activities service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these endpoints
//! are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP status is the only success discriminator. Callers get `ApiError`
//! instead of panics so failures degrade the page without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActivityBoard, ApiMessage};

/// Root path of the activities API, relative to the page origin.
pub const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Failure of an activities API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or did not complete.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered OK but the body did not decode.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The server answered with a non-OK status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, body: ApiMessage },
}

impl ApiError {
    /// Whether this failure came from the server rather than the network.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn activity_action_endpoint(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/{action}?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(activity: &str, email: &str) -> String {
    activity_action_endpoint(activity, "signup", email)
}

#[cfg(any(test, feature = "hydrate"))]
fn unregister_endpoint(activity: &str, email: &str) -> String {
    activity_action_endpoint(activity, "unregister", email)
}

/// Decode a non-OK body. A body that is not a JSON object is a decode
/// failure, not a rejection, so callers show their transport-class message.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn rejection(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ApiMessage>(body) {
        Ok(body) => ApiError::Rejected { status, body },
        Err(e) => ApiError::Decode(format!("status {status}: {e}")),
    }
}

/// Fetch the full activity listing from `GET /activities`.
///
/// # Errors
///
/// Returns `Transport` if the request fails, `Rejected` on a non-OK status,
/// and `Decode` if the body is not a name → activity mapping.
pub async fn fetch_activities() -> Result<ActivityBoard, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(resp.status(), &body));
        }
        resp.json::<ActivityBoard>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Register `email` for `activity` via `POST /activities/{activity}/signup`.
///
/// # Errors
///
/// Returns `Rejected` with the server's `{detail}` body on a non-OK status,
/// `Transport` if the request fails, and `Decode` if an OK body is not JSON.
pub async fn sign_up(activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_message(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Remove `email` from `activity` via `DELETE /activities/{activity}/unregister`.
///
/// # Errors
///
/// Same contract as [`sign_up`].
pub async fn unregister(activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = unregister_endpoint(activity, email);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_message(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn read_message(resp: gloo_net::http::Response) -> Result<ApiMessage, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(rejection(status, &body));
    }
    serde_json::from_str::<ApiMessage>(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
