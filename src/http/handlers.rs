use std::sync::MutexGuard;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::error;

use crate::domain::{AccountLedger, AccountSummary};
use crate::http::dto::{CreateAccountRequest, MutationRequest, SuccessResponse};
use crate::http::errors::{json_error, ledger_error_to_response};
use crate::http::SharedLedger;

type HandlerResult<T> = Result<T, Response>;

// The guard is held for the whole operation, so concurrent requests on one
// account are serialized.
fn lock(ledger: &SharedLedger) -> HandlerResult<MutexGuard<'_, AccountLedger>> {
    ledger.lock().map_err(|_| {
        error!("ledger lock poisoned");
        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "ledger unavailable",
        )
    })
}

pub async fn create_account(
    State(ledger): State<SharedLedger>,
    Json(req): Json<CreateAccountRequest>,
) -> HandlerResult<(StatusCode, Json<SuccessResponse>)> {
    let balance = req.balance.parse()?;
    lock(&ledger)?
        .create_account(&req.number, &req.name, balance, &req.pin)
        .map_err(ledger_error_to_response)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

pub async fn deposit(
    State(ledger): State<SharedLedger>,
    Json(req): Json<MutationRequest>,
) -> HandlerResult<Json<SuccessResponse>> {
    let amount = req.amount.parse()?;
    lock(&ledger)?
        .deposit(&req.number, amount, &req.pin)
        .map_err(ledger_error_to_response)?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn withdraw(
    State(ledger): State<SharedLedger>,
    Json(req): Json<MutationRequest>,
) -> HandlerResult<Json<SuccessResponse>> {
    let amount = req.amount.parse()?;
    lock(&ledger)?
        .try_withdraw(&req.number, amount, &req.pin)
        .map_err(ledger_error_to_response)?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn list_accounts(
    State(ledger): State<SharedLedger>,
) -> HandlerResult<Json<Vec<AccountSummary>>> {
    let summaries = lock(&ledger)?
        .list_accounts()
        .map(|account| account.summary())
        .collect();
    Ok(Json(summaries))
}
