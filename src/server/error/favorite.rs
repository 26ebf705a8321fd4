use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::favorite::FavoriteKind};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {user_id} already has {kind} ID {target_id} as a favorite")]
    AlreadyFavorite {
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    },
    #[error("User ID {user_id} does not have {kind} ID {target_id} as a favorite")]
    NotFavorite {
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyFavorite { kind, .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("{} is already a favorite", kind.label()),
                }),
            )
                .into_response(),
            Self::NotFavorite { kind, .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} is not a favorite", kind.label()),
                }),
            )
                .into_response(),
        }
    }
}
