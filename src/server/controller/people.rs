use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, catalog::CharacterDto},
    server::{
        controller::util::path::Path,
        data::catalog::CharacterRepository,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// Get all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 404, description = "No characters exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let characters = character_repo.get_all().await?;
    if characters.is_empty() {
        return Err(CatalogError::CharactersNotFound.into());
    }

    let character_dtos: Vec<CharacterDto> =
        characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(character_dtos)))
}

/// Get a single character by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 200, description = "Success when retrieving the character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repo = CharacterRepository::new(&state.db);

    let Some(character) = character_repo.get_by_id(people_id).await? else {
        return Err(CatalogError::CharacterNotFound(people_id).into());
    };

    Ok((StatusCode::OK, Json(CharacterDto::from(character))))
}
