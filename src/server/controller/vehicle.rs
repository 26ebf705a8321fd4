use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, catalog::VehicleDto},
    server::{
        controller::util::path::Path,
        data::catalog::VehicleRepository,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = Vec<VehicleDto>),
        (status = 404, description = "No vehicles exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let vehicles = vehicle_repo.get_all().await?;
    if vehicles.is_empty() {
        return Err(CatalogError::VehiclesNotFound.into());
    }

    let vehicle_dtos: Vec<VehicleDto> = vehicles.into_iter().map(VehicleDto::from).collect();

    Ok((StatusCode::OK, Json(vehicle_dtos)))
}

/// Get a single vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "ID of the vehicle"),
    ),
    responses(
        (status = 200, description = "Success when retrieving the vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let Some(vehicle) = vehicle_repo.get_by_id(vehicle_id).await? else {
        return Err(CatalogError::VehicleNotFound(vehicle_id).into());
    };

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))))
}
