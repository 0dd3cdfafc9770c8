pub mod account;
pub mod error;
pub mod ledger;
pub mod types;

pub use account::{Account, AccountSummary};
pub use error::{LedgerError, LedgerResult};
pub use ledger::AccountLedger;
pub use types::{AccountId, Amount, Pin};
