use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::server::{
    controller::{
        vehicle::{get_vehicle, get_vehicles},
        util::path::Path,
    },
    model::app::AppState,
};
use serde_json::json;

use super::*;

/// Expect 200 with the vehicle class under `class_vehicle`
#[tokio::test]
async fn gets_vehicle_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("Sand Crawler")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = send(&state, Method::GET, "/vehicles/1").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Sand Crawler");
    assert_eq!(body["class_vehicle"], "wheeled");
    assert_eq!(body["cargo_capacity"], 50000);

    Ok(())
}

/// Expect 200 with every vehicle
#[tokio::test]
async fn lists_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("Sand Crawler")
        .with_vehicle("T-16 skyhopper")
        .build()
        .await?;

    let resp = get_vehicles(State(test.to_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 404 with the plural message when no vehicles exist
#[tokio::test]
async fn returns_not_found_for_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_vehicles(State(test.to_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Vehicles not found" }));

    Ok(())
}

/// Expect 404 for a vehicle ID that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_vehicle(State(test.to_app_state()), Path(4))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Vehicle not found" }));

    Ok(())
}
