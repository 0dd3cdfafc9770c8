use serde::Serialize;

use crate::domain::types::{AccountId, Amount, Pin};

/// One teller account. Constructed and mutated only by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Amount,
    pin: Pin,
}

/// Read-only snapshot of an account, as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub holder_name: String,
    pub balance: Amount,
}

impl Account {
    pub(crate) fn new(id: AccountId, holder_name: String, balance: Amount, pin: Pin) -> Self {
        Account {
            id,
            holder_name,
            balance,
            pin,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub(crate) fn pin(&self) -> &Pin {
        &self.pin
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            holder_name: self.holder_name.clone(),
            balance: self.balance,
        }
    }

    /// Returns false and leaves the balance untouched if the new balance
    /// would exceed [`Amount::max_value`].
    pub(crate) fn credit(&mut self, amount: Amount) -> bool {
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Returns false and leaves the balance untouched if funds are short.
    pub(crate) fn debit(&mut self, amount: Amount) -> bool {
        if self.balance < amount {
            return false;
        }
        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    fn account(balance: &str) -> Account {
        Account::new(
            AccountId::from("A1"),
            "Alice".to_string(),
            amount(balance),
            Pin::parse("1234").unwrap(),
        )
    }

    #[test]
    fn test_credit_increases_balance() {
        let mut account = account("0");
        assert!(account.credit(amount("100")));
        assert_eq!(account.balance(), amount("100"));
    }

    #[test]
    fn test_credit_past_max_fails() {
        let mut account = account("1");
        assert!(!account.credit(Amount::max_value()));
        assert_eq!(account.balance(), amount("1"));
    }

    #[test]
    fn test_debit_decreases_balance() {
        let mut account = account("100");
        assert!(account.debit(amount("30")));
        assert_eq!(account.balance(), amount("70"));
    }

    #[test]
    fn test_debit_insufficient_funds_fails() {
        let mut account = account("50");
        assert!(!account.debit(amount("100")));
        assert_eq!(account.balance(), amount("50"));
    }

    #[test]
    fn test_debit_exact_balance_succeeds() {
        let mut account = account("50");
        assert!(account.debit(amount("50")));
        assert_eq!(account.balance(), Amount::ZERO);
    }

    #[test]
    fn test_debit_one_cent_over_fails() {
        let mut account = account("50");
        assert!(!account.debit(amount("50.01")));
        assert_eq!(account.balance(), amount("50"));
    }

    #[test]
    fn test_summary_copies_visible_fields() {
        let account = account("12.5");
        let summary = account.summary();
        assert_eq!(summary.id, AccountId::from("A1"));
        assert_eq!(summary.holder_name, "Alice");
        assert_eq!(summary.balance, amount("12.50"));
    }
}
