use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, header};
use tower::ServiceExt;

use super::*;

async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = api_routes(AppState::new()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn register_route_returns_user_and_token() {
    let state = AppState::new();
    let body = serde_json::json!({ "username": "johndoe", "email": "john@example.com", "password": "secret" });

    let (status, json) = post_json(api_routes(state.clone()), "/api/auth/register", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["username"], "johndoe");
    assert!(json["accessToken"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(json.get("error").is_none());
    assert_eq!(state.users.read().await.len(), 1);
}

#[tokio::test]
async fn register_route_shares_state_across_requests() {
    let state = AppState::new();
    let body = serde_json::json!({ "username": "johndoe", "email": "john@example.com", "password": "secret" });
    let _ = post_json(api_routes(state.clone()), "/api/auth/register", body).await;

    let again = serde_json::json!({ "username": "JohnDoe", "email": "other@example.com", "password": "secret" });
    let (status, json) = post_json(api_routes(state), "/api/auth/register", again).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"]["username"], "This username is already in use.");
    assert!(json.get("user").is_none());
}

#[tokio::test]
async fn register_route_rejects_get() {
    let request = Request::builder().uri("/api/auth/register").body(Body::empty()).unwrap();
    let response = api_routes(AppState::new()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
