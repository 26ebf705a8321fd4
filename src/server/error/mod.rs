//! Error types for the Holocron server application.
//!
//! Domain errors (missing catalog records, favorite conflicts, configuration) each carry
//! their own `IntoResponse` mapping; everything else becomes a logged 500. All errors use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod catalog;
pub mod config;
pub mod favorite;

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError, favorite::FavoriteError},
};

/// Main error type for the Holocron server application.
///
/// Aggregates domain-specific errors and external library errors into a single type so
/// handlers can use `?` throughout. The `IntoResponse` implementation maps each error to
/// its HTTP response.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Catalog errors (requested users, planets, characters, or vehicles missing)
/// - Favorite errors (duplicate favorite, removing a favorite that doesn't exist)
/// - Path errors (IDs that don't parse as integers)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Requested catalog record or records not found.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Favorite link conflict or absence.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Path parameters that could not be extracted, such as a non-integer ID.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Missing catalog records or favorite links, or IDs that don't parse
/// - 409 Conflict - Favorite already exists
/// - 500 Internal Server Error - All other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::PathRejection(PathRejection::FailedToDeserializePathParams(err)) => {
                tracing::debug!("{}", err);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
