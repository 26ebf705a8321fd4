use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, GreetingDto},
        user::{UserDto, UserFavoritesDto},
    },
    server::{
        controller::util::path::Path,
        data::catalog::UserRepository,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static USER_TAG: &str = "user";

/// Static greeting, kept for clients probing the API
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting message", body = GreetingDto),
    ),
)]
pub async fn get_greeting() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(GreetingDto {
            msg: "Hello, this is your GET /user response ".to_string(),
        }),
    )
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 404, description = "No users exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let users = user_repo.get_all().await?;
    if users.is_empty() {
        return Err(CatalogError::UsersNotFound.into());
    }

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// Get a user along with their favorite characters, vehicles, and planets
///
/// Kinds the user has no favorites of are left out of the `favorites` object.
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
    ),
    responses(
        (status = 200, description = "Success when retrieving user favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let user_favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(user_favorites)))
}
