use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy for a single attestation request. Never retried
/// internally; the relay calling this service decides whether to retry.
#[derive(Debug, Error)]
pub enum AttestError {
    #[error("burn record not found")]
    BurnNotFound,

    #[error("burn record not yet finalized")]
    NotFinalized,

    #[error("burn record references an unregistered asset")]
    UnknownAsset,

    #[error("requested user does not match the burn record")]
    UserMismatch,

    #[error("requested amount does not match the burn record")]
    AmountMismatch,

    #[error("requested set_version does not match this validator's active set")]
    WrongSetVersion,

    #[error("source-chain RPC failure: {0}")]
    SourceChainUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl AttestError {
    fn kind(&self) -> &'static str {
        match self {
            AttestError::BurnNotFound => "BurnNotFound",
            AttestError::NotFinalized => "NotFinalized",
            AttestError::UnknownAsset => "UnknownAsset",
            AttestError::UserMismatch => "UserMismatch",
            AttestError::AmountMismatch => "AmountMismatch",
            AttestError::WrongSetVersion => "WrongSetVersion",
            AttestError::SourceChainUnavailable(_) => "SourceChainUnavailable",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AttestError::BurnNotFound => StatusCode::NOT_FOUND,
            AttestError::NotFinalized => StatusCode::CONFLICT,
            AttestError::UnknownAsset => StatusCode::UNPROCESSABLE_ENTITY,
            AttestError::UserMismatch => StatusCode::UNPROCESSABLE_ENTITY,
            AttestError::AmountMismatch => StatusCode::UNPROCESSABLE_ENTITY,
            AttestError::WrongSetVersion => StatusCode::CONFLICT,
            AttestError::SourceChainUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AttestError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(kind = self.kind(), error = %self, "attest-burn-v3 request failed");
        (status, Json(ErrorBody { error: self.kind() })).into_response()
    }
}
