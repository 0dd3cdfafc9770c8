//! Ledger error model.

use thiserror::Error;

use crate::domain::types::{AccountId, Amount};

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure of a single ledger operation.
///
/// None of these are fatal: the operation is abandoned without side effects
/// and the ledger stays usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Malformed account-creation arguments.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("account {0} already exists")]
    DuplicateAccount(AccountId),

    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    /// Supplied PIN does not match the stored one.
    #[error("authentication failed")]
    Authentication,

    /// Deposit or withdrawal of a zero or negative amount.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Amount),

    /// Credit would push the balance past the largest supported amount.
    #[error("deposit of {amount} would exceed the maximum balance")]
    BalanceOverflow { amount: Amount },

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Amount },
}

impl LedgerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidInput(_) => "invalid_input",
            LedgerError::DuplicateAccount(_) => "duplicate_account",
            LedgerError::AccountNotFound(_) => "account_not_found",
            LedgerError::Authentication => "authentication_failed",
            LedgerError::InvalidAmount(_) => "invalid_amount",
            LedgerError::BalanceOverflow { .. } => "balance_overflow",
            LedgerError::InsufficientFunds { .. } => "insufficient_funds",
        }
    }
}
