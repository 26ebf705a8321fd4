use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::server::{
    controller::{
        planet::{get_planet, get_planets},
        util::path::Path,
    },
    error::{catalog::CatalogError, Error},
    model::app::AppState,
};
use serde_json::json;

use super::*;

/// Expect 200 with every planet in ID order
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/planets").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tatooine", "Alderaan"]);

    Ok(())
}

/// Expect 404 with the plural message when no planets exist
#[tokio::test]
async fn returns_not_found_for_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/planets").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Planets not found" }));

    Ok(())
}

/// Expect the handler to surface CatalogError::PlanetsNotFound
#[tokio::test]
async fn handler_fails_for_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planets(State(test.to_app_state())).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::PlanetsNotFound))
    ));

    Ok(())
}

/// Expect 200 with every field of the requested planet
#[tokio::test]
async fn gets_planet_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/planets/1").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": 1,
            "name": "Tatooine",
            "population": 200000,
            "rotation_period": 23,
            "orbital_period": 304,
            "diameter": 10465,
            "gravity": 1.0,
            "terrain": "desert",
            "surface_water": 1.0,
            "climate": "arid",
        })
    );

    Ok(())
}

/// Expect 404 for a planet ID that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_planet(State(test.to_app_state()), Path(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the planet table is missing
#[tokio::test]
async fn returns_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_planets(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
