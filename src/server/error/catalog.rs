use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A requested catalog record, or every record of a kind, does not exist.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("No users found")]
    UsersNotFound,
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    #[error("No planets found")]
    PlanetsNotFound,
    #[error("Character ID {0} not found")]
    CharacterNotFound(i32),
    #[error("No characters found")]
    CharactersNotFound,
    #[error("Vehicle ID {0} not found")]
    VehicleNotFound(i32),
    #[error("No vehicles found")]
    VehiclesNotFound,
}

impl CatalogError {
    /// Message returned to the API caller
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "User not found",
            Self::UsersNotFound => "Users not found",
            Self::PlanetNotFound(_) => "Planet not found",
            Self::PlanetsNotFound => "Planets not found",
            Self::CharacterNotFound(_) => "Character not found",
            Self::CharactersNotFound => "Characters not found",
            Self::VehicleNotFound(_) => "Vehicle not found",
            Self::VehiclesNotFound => "Vehicles not found",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}
