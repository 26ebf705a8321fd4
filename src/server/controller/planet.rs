use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, catalog::PlanetDto},
    server::{
        controller::util::path::Path,
        data::catalog::PlanetRepository,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 404, description = "No planets exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let planets = planet_repo.get_all().await?;
    if planets.is_empty() {
        return Err(CatalogError::PlanetsNotFound.into());
    }

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet"),
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let Some(planet) = planet_repo.get_by_id(planet_id).await? else {
        return Err(CatalogError::PlanetNotFound(planet_id).into());
    };

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}
