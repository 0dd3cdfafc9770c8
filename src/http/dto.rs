use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::domain::Amount;
use crate::http::errors::json_error;

// -------------------------
// Request DTOs
// -------------------------

/// Amounts arrive either as JSON numbers or as decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(serde_json::Number),
    Text(String),
}

impl AmountInput {
    pub fn parse(&self) -> Result<Amount, Response> {
        let text = match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.clone(),
        };
        Amount::parse(&text).map_err(|_| {
            json_error(
                StatusCode::BAD_REQUEST,
                "invalid_amount",
                format!("not a decimal amount: '{text}'"),
            )
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub number: String,
    pub name: String,
    pub balance: AmountInput,
    pub pin: String,
}

/// Body shared by deposit and withdraw.
#[derive(Debug, Deserialize)]
pub struct MutationRequest {
    pub number: String,
    pub amount: AmountInput,
    pub pin: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}
