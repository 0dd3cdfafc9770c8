use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::LedgerError;

pub fn ledger_error_to_response(err: LedgerError) -> Response {
    let status = match &err {
        LedgerError::InvalidInput(_) | LedgerError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        // No challenge scheme to advertise, so a bad PIN is a 403 rather than a 401.
        LedgerError::Authentication => StatusCode::FORBIDDEN,
        LedgerError::AccountNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::DuplicateAccount(_) => StatusCode::CONFLICT,
        LedgerError::BalanceOverflow { .. } | LedgerError::InsufficientFunds { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    json_error(status, err.code(), err.to_string())
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
