use axum::http::{Method, StatusCode};
use holocron::server::model::app::AppState;
use serde_json::json;

use super::*;

/// Expect the directory to list documented routes and the docs location
#[tokio::test]
async fn serves_sitemap() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["docs"], "/api/docs");

    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e.as_str())
        .collect();
    assert!(endpoints.contains(&"GET /planets"));
    assert!(endpoints.contains(&"GET /people/{people_id}"));
    assert!(endpoints.contains(&"POST /users/{user_id}/favorite/vehicle/{vehicle_id}"));
    assert!(endpoints.contains(&"DELETE /users/{user_id}/people/{character_id}/favorite"));
    assert!(!endpoints.iter().any(|e| e.contains("poeple")));

    Ok(())
}

/// Expect a trailing slash to reach the same handler
#[tokio::test]
async fn ignores_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/planets/").await;

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect unknown routes to answer with a JSON 404
#[tokio::test]
async fn returns_not_found_for_unknown_route() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/starships").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Not found" }));

    Ok(())
}

/// Expect the OpenAPI document to be served alongside Swagger UI
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/api/docs/openapi.json").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Holocron");
    assert!(body["paths"].get("/users/{user_id}/favorites").is_some());

    Ok(())
}

/// Expect IDs that don't parse as integers to answer with the JSON 404 body
#[tokio::test]
async fn returns_not_found_for_unparsable_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let state: AppState = test.to_app_state();

    let requests = [
        (Method::GET, "/people/abc"),
        (Method::GET, "/planets/99999999999"),
        (Method::POST, "/users/1/favorite/planet/x"),
        (Method::DELETE, "/users/one/vehicle/1/favorite"),
    ];

    for (method, uri) in requests {
        let resp = send(&state, method, uri).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body_json(resp).await, json!({ "error": "Not found" }), "{}", uri);
    }

    Ok(())
}

/// Expect a known path requested with an unsupported method to answer with a JSON 405
#[tokio::test]
async fn returns_method_not_allowed_for_unsupported_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/users/1/favorite/planet/1").await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Method not allowed" })
    );

    let resp = send(&state, Method::POST, "/planets").await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
