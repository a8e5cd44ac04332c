use std::collections::HashMap;
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use crate::routes::api_routes;
use crate::state::AppState;
use crate::upstream::{UNAVAILABLE_DETAIL, UpstreamClient};

const LISTING: &str = r#"{"Programming Class":{"description":"Learn programming","schedule":"Tue","max_participants":20,"participants":[]},"Chess Club":{"description":"Strategy","schedule":"Fri","max_participants":12,"participants":["michael@mergington.edu"]}}"#;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn fake_signup(Path(name): Path<String>, Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
    let email = q.get("email").cloned().unwrap_or_default();
    if name == "Chess Club" && email == "michael@mergington.edu" {
        return (StatusCode::BAD_REQUEST, axum::Json(json!({ "detail": "Student already signed up" })));
    }
    (StatusCode::OK, axum::Json(json!({ "message": format!("Signed up {email} for {name}") })))
}

async fn fake_unregister(Path(name): Path<String>, Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
    let email = q.get("email").cloned().unwrap_or_default();
    if name == "Chess Club" && email == "michael@mergington.edu" {
        return (StatusCode::OK, axum::Json(json!({ "message": format!("Unregistered {email} from {name}") })));
    }
    (StatusCode::NOT_FOUND, axum::Json(json!({ "detail": "Student not registered for this activity" })))
}

fn fake_activities_service() -> Router {
    Router::new()
        .route(
            "/activities",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], LISTING) }),
        )
        .route("/activities/{name}/signup", post(fake_signup))
        .route("/activities/{name}/unregister", delete(fake_unregister))
}

async fn spawn_proxy(upstream_url: &str) -> String {
    let upstream = UpstreamClient::new(upstream_url, Duration::from_secs(5)).unwrap();
    spawn(api_routes(AppState::new(upstream))).await
}

#[tokio::test]
async fn list_passes_body_through_verbatim() {
    let upstream = spawn(fake_activities_service()).await;
    let proxy = spawn_proxy(&upstream).await;

    let resp = reqwest::get(format!("{proxy}/activities")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    // Byte-identical, so the server's key order survives.
    assert_eq!(resp.text().await.unwrap(), LISTING);
}

#[tokio::test]
async fn signup_forwards_encoded_name_and_email() {
    let upstream = spawn(fake_activities_service()).await;
    let proxy = spawn_proxy(&upstream).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/activities/Chess%20Club/signup?email=new.student%40mergington.edu"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Signed up new.student@mergington.edu for Chess Club");
}

#[tokio::test]
async fn signup_rejection_keeps_status_and_detail() {
    let upstream = spawn(fake_activities_service()).await;
    let proxy = spawn_proxy(&upstream).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/activities/Chess%20Club/signup?email=michael%40mergington.edu"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Student already signed up");
}

#[tokio::test]
async fn unregister_forwards_and_relays_not_found() {
    let upstream = spawn(fake_activities_service()).await;
    let proxy = spawn_proxy(&upstream).await;
    let client = reqwest::Client::new();

    let ok = client
        .delete(format!("{proxy}/activities/Chess%20Club/unregister?email=michael%40mergington.edu"))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let missing = client
        .delete(format!("{proxy}/activities/Chess%20Club/unregister?email=nobody%40mergington.edu"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["detail"], "Student not registered for this activity");
}

#[tokio::test]
async fn unreachable_service_yields_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let proxy = spawn_proxy(&dead).await;

    let resp = reqwest::get(format!("{proxy}/activities")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], UNAVAILABLE_DETAIL);
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn_proxy("http://127.0.0.1:9").await;
    let resp = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
