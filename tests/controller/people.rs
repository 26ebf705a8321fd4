use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::server::{
    controller::{
        people::{get_people, get_person},
        util::path::Path,
    },
    error::{catalog::CatalogError, Error},
    model::app::AppState,
};
use serde_json::json;

use super::*;

/// Expect 200 with one entry per character
#[tokio::test]
async fn lists_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("Luke Skywalker")
        .with_character("Obi-Wan Kenobi")
        .with_character("Han Solo")
        .build()
        .await?;

    let resp = get_people(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert_eq!(body[2]["name"], "Han Solo");

    Ok(())
}

/// Expect CatalogError::CharactersNotFound when no characters exist
#[tokio::test]
async fn fails_for_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_people(State(test.to_app_state())).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::CharactersNotFound))
    ));

    Ok(())
}

/// Expect 200 with the requested character
#[tokio::test]
async fn gets_person_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("Luke Skywalker")
        .build()
        .await?;

    let resp = get_person(State(test.to_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": 1,
            "name": "Luke Skywalker",
            "species": "Human",
            "height": 172,
            "mass": 77,
            "gender": "male",
            "hair_color": "blond",
            "skin_color": "fair",
        })
    );

    Ok(())
}

/// Expect 404 with the singular message for an unknown character
#[tokio::test]
async fn returns_not_found_for_nonexistent_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/people/999").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Character not found" }));

    Ok(())
}
