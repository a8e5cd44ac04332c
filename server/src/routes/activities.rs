//! Activities API routes, forwarded to the external activities service.

use axum::extract::{Path, RawQuery, State};
use axum::http::Method;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::upstream::activity_action_path;

/// `GET /activities`
pub async fn list(State(state): State<AppState>) -> Response {
    forward(&state, Method::GET, "/activities".to_owned(), None).await
}

/// `POST /activities/{name}/signup?email=…`
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    forward(&state, Method::POST, activity_action_path(&name, "signup"), query).await
}

/// `DELETE /activities/{name}/unregister?email=…`
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    forward(&state, Method::DELETE, activity_action_path(&name, "unregister"), query).await
}

async fn forward(state: &AppState, method: Method, path: String, query: Option<String>) -> Response {
    match state.upstream.send(method.clone(), &path, query.as_deref()).await {
        Ok(reply) => {
            tracing::debug!(%method, %path, status = %reply.status, "activities request forwarded");
            reply.into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, %method, %path, "activities service request failed");
            e.into_response()
        }
    }
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
