use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::server::{
    controller::{
        favorite::{add_favorite_character, add_favorite_vehicle, remove_favorite_planet},
        util::path::Path,
    },
    model::app::AppState,
};
use serde_json::json;

use super::*;

/// Expect 201 on the first add, 409 on the repeat, and the planet listed once in favorites
#[tokio::test]
async fn adds_planet_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_planet("Tatooine")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::POST, "/users/1/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Favorite planet added successfully" })
    );

    let resp = send(&state, Method::POST, "/users/1/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Planet is already a favorite" })
    );

    let resp = send(&state, Method::GET, "/users/1/favorites").await;
    let body = body_json(resp).await;
    assert_eq!(body["favorites"]["planets"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["favorites"]["planets"][0]["id"], 1);
    assert_eq!(body["favorites"]["planets"][0]["name"], "Tatooine");
    assert_eq!(test.favorite().count_favorite_planets(1, 1).await?, 1);

    Ok(())
}

/// Expect 404 when the user does not exist
#[tokio::test]
async fn add_returns_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("Han Solo")
        .build()
        .await?;

    let resp = add_favorite_character(State(test.to_app_state()), Path((1, 1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "User not found" }));

    Ok(())
}

/// Expect 404 when the character does not exist
#[tokio::test]
async fn add_returns_not_found_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::POST, "/users/1/favorite/people/8").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Character not found" }));

    Ok(())
}

/// Expect 201 with the vehicle message
#[tokio::test]
async fn adds_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_vehicle("Sand Crawler")
        .build()
        .await?;

    let resp = add_favorite_vehicle(State(test.to_app_state()), Path((1, 1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Favorite vehicle added successfully" })
    );

    Ok(())
}

/// Expect 204 with an empty body, the link removed, and a re-add to succeed
#[tokio::test]
async fn removes_planet_and_allows_re_adding() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_planet("Tatooine")
        .with_favorite_planet(1, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::DELETE, "/users/1/planet/1/favorite").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
    assert_eq!(test.favorite().count_favorite_planets(1, 1).await?, 0);

    let resp = send(&state, Method::POST, "/users/1/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 with the not-a-favorite message when no link exists
#[tokio::test]
async fn remove_returns_not_found_when_not_a_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = remove_favorite_planet(State(test.to_app_state()), Path((1, 1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Planet is not a favorite" })
    );

    Ok(())
}

/// Expect 404 when removing a favorite for a planet that does not exist
#[tokio::test]
async fn remove_returns_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::DELETE, "/users/1/planet/3/favorite").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Planet not found" }));

    Ok(())
}

/// Expect both the corrected and the legacy character paths to remove the link
#[tokio::test]
async fn removes_character_through_either_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_character("Obi-Wan Kenobi")
        .with_character("Yoda")
        .with_favorite_character(1, 1)
        .with_favorite_character(1, 2)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::DELETE, "/users/1/people/1/favorite").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&state, Method::DELETE, "/users/1/poeple/2/favorite").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert_eq!(test.favorite().count_favorite_characters(1, 1).await?, 0);
    assert_eq!(test.favorite().count_favorite_characters(1, 2).await?, 0);

    Ok(())
}

/// Expect the vehicle link to be removed
#[tokio::test]
async fn removes_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("Luke")
        .with_vehicle("Sand Crawler")
        .with_favorite_vehicle(1, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::DELETE, "/users/1/vehicle/1/favorite").await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(test.favorite().count_favorite_vehicles(1, 1).await?, 0);

    Ok(())
}
