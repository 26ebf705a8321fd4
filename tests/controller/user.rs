use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::server::{
    controller::{
        user::{get_greeting, get_user_favorites, get_users},
        util::path::Path,
    },
    model::app::AppState,
};
use serde_json::json;

use super::*;

/// Expect the static greeting without touching the database
#[tokio::test]
async fn returns_greeting() {
    let resp = get_greeting().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Hello, this is your GET /user response " })
    );
}

/// Expect 200 with users serialized with an ISO subscription date
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_user("Leia")
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "email": "luke@holonet.test",
            "first_name": "Luke",
            "last_name": "Skywalker",
            "subscription_date": "2024-05-04",
        })
    );
    assert_eq!(body[1]["first_name"], "Leia");

    Ok(())
}

/// Expect 404 with the plural message when no users exist
#[tokio::test]
async fn returns_not_found_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_users(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Users not found" }));

    Ok(())
}

/// Expect favorites grouped by kind with kinds lacking favorites omitted
#[tokio::test]
async fn gets_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_character("Obi-Wan Kenobi")
        .with_character("Yoda")
        .with_favorite_character(1, 2)
        .with_favorite_character(1, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/users/1/favorites").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["favorites"]["characters"][0]["name"], "Yoda");
    assert_eq!(body["favorites"]["characters"][1]["name"], "Obi-Wan Kenobi");
    assert!(body["favorites"].get("planets").is_none());
    assert!(body["favorites"].get("vehicles").is_none());

    Ok(())
}

/// Expect an empty favorites object for a user without favorites
#[tokio::test]
async fn gets_empty_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .build()
        .await?;

    let resp = get_user_favorites(State(test.to_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["favorites"], json!({}));

    Ok(())
}

/// Expect 404 when the user does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_user_favorites(State(test.to_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "User not found" }));

    Ok(())
}
