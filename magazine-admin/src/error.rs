use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
        .into_response()
    }
}
