//! JSON request layer over the ledger.

pub mod dto;
pub mod errors;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::domain::AccountLedger;

/// One lock around the whole account collection.
pub type SharedLedger = Arc<Mutex<AccountLedger>>;

pub fn shared(ledger: AccountLedger) -> SharedLedger {
    Arc::new(Mutex::new(ledger))
}

pub fn router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/createAccount", post(handlers::create_account))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .route("/accounts", get(handlers::list_accounts))
        .with_state(ledger)
}

pub async fn serve(bind: SocketAddr, ledger: SharedLedger) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(ledger))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
