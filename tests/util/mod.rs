//! Helpers for driving the full router in integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
};
use holocron::server::{model::app::AppState, router};
use tower::ServiceExt;

/// Sends a bodiless request through the complete application service
pub async fn send(state: &AppState, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    router::app(state.clone()).oneshot(request).await.unwrap()
}

/// Reads the response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
