use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        controller::util::path::Path,
        error::Error,
        model::{app::AppState, favorite::FavoriteKind},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

fn added(kind: FavoriteKind) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!("Favorite {} added successfully", kind),
        }),
    )
}

/// Mark a planet as one of the user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet"),
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Planet is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_favorite_planet(user_id, planet_id)
        .await?;

    Ok(added(FavoriteKind::Planet))
}

/// Mark a character as one of the user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/people/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 201, description = "Character added to favorites", body = MessageDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Character is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_favorite_character(user_id, character_id)
        .await?;

    Ok(added(FavoriteKind::Character))
}

/// Mark a vehicle as one of the user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("vehicle_id" = i32, Path, description = "ID of the vehicle"),
    ),
    responses(
        (status = 201, description = "Vehicle added to favorites", body = MessageDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle is already a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_favorite_vehicle(user_id, vehicle_id)
        .await?;

    Ok(added(FavoriteKind::Vehicle))
}

/// Remove a planet from the user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/planet/{planet_id}/favorite",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet"),
    ),
    responses(
        (status = 204, description = "Planet removed from favorites"),
        (status = 404, description = "User or planet not found, or planet is not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a character from the user's favorites
///
/// Also served at `/users/{user_id}/poeple/{character_id}/favorite` for older clients.
#[utoipa::path(
    delete,
    path = "/users/{user_id}/people/{character_id}/favorite",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 204, description = "Character removed from favorites"),
        (status = 404, description = "User or character not found, or character is not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_character(user_id, character_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a vehicle from the user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/vehicle/{vehicle_id}/favorite",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("vehicle_id" = i32, Path, description = "ID of the vehicle"),
    ),
    responses(
        (status = 204, description = "Vehicle removed from favorites"),
        (status = 404, description = "User or vehicle not found, or vehicle is not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_vehicle(user_id, vehicle_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
