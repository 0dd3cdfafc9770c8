use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::domain::account::Account;
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::types::{AccountId, Amount, Pin};

/// Owns every account and gates all mutations behind validation and PIN checks.
///
/// Accounts are kept in creation order; `index` maps ids to positions.
#[derive(Debug, Default)]
pub struct AccountLedger {
    accounts: Vec<Account>,
    index: HashMap<AccountId, usize>,
}

impl AccountLedger {
    pub fn new() -> Self {
        AccountLedger {
            accounts: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.index.get(id).map(|&pos| &self.accounts[pos])
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts in creation order.
    pub fn list_accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.iter()
    }

    /// Checks run in order and the first violation wins; nothing is stored on failure.
    pub fn create_account(
        &mut self,
        id: &str,
        holder_name: &str,
        initial_balance: Amount,
        pin: &str,
    ) -> LedgerResult<()> {
        if id.trim().is_empty() {
            return Err(LedgerError::invalid_input("account number must not be empty"));
        }
        if holder_name.trim().is_empty() {
            return Err(LedgerError::invalid_input("holder name must not be empty"));
        }
        if initial_balance.is_negative() {
            return Err(LedgerError::invalid_input(
                "initial balance must not be negative",
            ));
        }
        if initial_balance > Amount::max_value() {
            return Err(LedgerError::invalid_input(
                "initial balance exceeds the maximum balance",
            ));
        }
        let pin = Pin::parse(pin)?;

        if self.index.contains_key(id) {
            return Err(LedgerError::DuplicateAccount(AccountId::from(id)));
        }

        let account_id = AccountId::from(id);
        self.index.insert(account_id.clone(), self.accounts.len());
        self.accounts.push(Account::new(
            account_id,
            holder_name.to_string(),
            initial_balance,
            pin,
        ));
        info!(account = id, balance = %initial_balance, "account created");
        Ok(())
    }

    pub fn deposit(&mut self, id: &str, amount: Amount, pin: &str) -> LedgerResult<()> {
        let account = self.authenticate(id, pin)?;
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if !account.credit(amount) {
            return Err(LedgerError::BalanceOverflow { amount });
        }
        debug!(account = id, amount = %amount, balance = %account.balance(), "deposit");
        Ok(())
    }

    /// Boolean form of [`try_withdraw`](Self::try_withdraw): every failure,
    /// including insufficient funds, collapses to `false`.
    pub fn withdraw(&mut self, id: &str, amount: Amount, pin: &str) -> bool {
        self.try_withdraw(id, amount, pin).is_ok()
    }

    pub fn try_withdraw(&mut self, id: &str, amount: Amount, pin: &str) -> LedgerResult<()> {
        let account = self.authenticate(id, pin)?;
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let available = account.balance();
        if !account.debit(amount) {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        debug!(account = id, amount = %amount, balance = %account.balance(), "withdrawal");
        Ok(())
    }

    // Not-found is reported before a PIN mismatch, so callers can tell the two apart.
    fn authenticate(&mut self, id: &str, pin: &str) -> LedgerResult<&mut Account> {
        let pos = match self.index.get(id) {
            Some(&pos) => pos,
            None => return Err(LedgerError::AccountNotFound(AccountId::from(id))),
        };
        let account = &mut self.accounts[pos];
        if !account.pin().matches(pin) {
            warn!(account = id, "authentication failed");
            return Err(LedgerError::Authentication);
        }
        Ok(account)
    }
}
