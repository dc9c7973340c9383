//! API error type and its HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rps_core::{Address, CodecError, GameError, LedgerError};
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game not found")]
    GameNotFound,

    #[error("no commitment on record for {0}")]
    NoCommitment(Address),

    #[error("missing X-Player-Address header")]
    MissingCaller,

    #[error("invalid X-Player-Address header: {0}")]
    InvalidCaller(CodecError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::GameNotFound | ApiError::NoCommitment(_) => StatusCode::NOT_FOUND,
            ApiError::MissingCaller | ApiError::InvalidCaller(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Game(
                GameError::DuplicateCommitment(_) | GameError::EmptyPot | GameError::GameSettled,
            ) => StatusCode::CONFLICT,
            ApiError::Game(GameError::Ledger(LedgerError::Unavailable(_)))
            | ApiError::Ledger(LedgerError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Codec(_) | ApiError::Game(_) | ApiError::Ledger(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Request failed: {}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
