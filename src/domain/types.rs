use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::LedgerError;

/// Opaque account identifier (the "account number" at the teller).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}

/// Decimal amount in currency minor units (2 decimal places).
///
/// Magnitude is capped at [`Amount::max_value`], so the sum of two in-range
/// amounts is always exact. Arithmetic is checked; there are no operator impls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

/// 99,999,999,999,999,999,999,999,999.99 expressed in cents.
const MAX_MINOR_UNITS: i128 = 10i128.pow(28) - 1;

impl Amount {
    pub const SCALE: u32 = 2;
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Rounds toward negative infinity: sub-cent input never gains value and
    /// a negative input never collapses to zero.
    pub fn new(value: Decimal) -> Self {
        let mut value =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::ToNegativeInfinity);
        value.rescale(Self::SCALE);
        Amount(value)
    }

    pub fn max_value() -> Self {
        Amount(Decimal::from_i128_with_scale(MAX_MINOR_UNITS, Self::SCALE))
    }

    pub fn parse(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s.trim())?;
        let amount = Self::new(decimal);
        if amount > Self::max_value() {
            return Err(rust_decimal::Error::ExceedsMaximumPossibleValue);
        }
        if amount.0 < -Self::max_value().0 {
            return Err(rust_decimal::Error::LessThanMinimumPossibleValue);
        }
        Ok(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// `None` if the result would leave the supported range.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        let sum = self.0.checked_add(rhs.0)?;
        if sum > Self::max_value().0 {
            return None;
        }
        Some(Amount(sum))
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        let diff = self.0.checked_sub(rhs.0)?;
        if diff < -Self::max_value().0 {
            return None;
        }
        Some(Amount(diff))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Four-digit numeric credential. Stored as given; never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub const LEN: usize = 4;

    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Pin(s.to_string()))
        } else {
            Err(LedgerError::invalid_input("PIN must be 4 digits"))
        }
    }

    /// Exact comparison against a caller-supplied PIN.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Operation kind of a batch script row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Create,
    Deposit,
    Withdraw,
}

impl FromStr for OperationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(OperationType::Create),
            "deposit" => Ok(OperationType::Deposit),
            "withdraw" => Ok(OperationType::Withdraw),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_rounds_down_to_2_decimals() {
        let amount = Amount::parse("1.239").expect("failed to parse amount");
        assert_eq!(
            amount.value(),
            Decimal::from_str("1.23").expect("failed to parse decimal")
        );
    }

    #[test]
    fn test_sub_cent_positive_rounds_to_zero() {
        let amount = Amount::parse("0.004").expect("failed to parse amount");
        assert_eq!(amount, Amount::ZERO);
        assert!(!amount.is_positive());
    }

    #[test]
    fn test_sub_cent_negative_stays_negative() {
        let amount = Amount::parse("-0.001").expect("failed to parse amount");
        assert!(amount.is_negative());
        assert_eq!(amount.to_string(), "-0.01");
    }

    #[test]
    fn test_amount_above_max_rejected() {
        assert_eq!(
            Amount::parse("79228162514264337593543950335"),
            Err(rust_decimal::Error::ExceedsMaximumPossibleValue)
        );
        assert_eq!(
            Amount::parse("-79228162514264337593543950335"),
            Err(rust_decimal::Error::LessThanMinimumPossibleValue)
        );
        assert!(Amount::parse("100000000000000000000000000").is_err());
    }

    #[test]
    fn test_amount_at_max_accepted() {
        let max = Amount::parse("99999999999999999999999999.99").expect("max is in range");
        assert_eq!(max, Amount::max_value());
        assert_eq!(max.to_string(), "99999999999999999999999999.99");
    }

    #[test]
    fn test_checked_add_stops_at_max() {
        let cent = Amount::parse("0.01").unwrap();
        assert_eq!(Amount::max_value().checked_add(cent), None);
        let below = Amount::max_value().checked_sub(cent).unwrap();
        assert_eq!(below.checked_add(cent), Some(Amount::max_value()));
    }

    #[test]
    fn test_checked_arithmetic_is_exact() {
        let a = Amount::parse("0.10").unwrap();
        let b = Amount::parse("0.20").unwrap();
        assert_eq!(a.checked_add(b), Some(Amount::parse("0.30").unwrap()));
        assert_eq!(b.checked_sub(a), Some(a));
    }

    #[test]
    fn test_amount_parses_with_whitespace() {
        let amount = Amount::parse("  100.5  ").expect("failed to parse amount");
        assert_eq!(
            amount.value(),
            Decimal::from_str("100.5").expect("failed to parse decimal")
        );
    }

    #[test]
    fn test_amount_display_2_decimals() {
        let amount = Amount::parse("1.5").expect("failed to parse amount");
        assert_eq!(format!("{}", amount), "1.50");
        let whole = Amount::parse("150").expect("failed to parse amount");
        assert_eq!(whole.to_string(), "150.00");
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert!(Amount::parse("ten").is_err());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("").is_err());
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let amount = Amount::parse("150").expect("failed to parse amount");
        let json = serde_json::to_string(&amount).expect("failed to serialize");
        assert_eq!(json, "\"150.00\"");
    }

    #[test]
    fn test_pin_accepts_four_digits() {
        assert!(Pin::parse("1234").is_ok());
        assert!(Pin::parse("0000").is_ok());
    }

    #[test]
    fn test_pin_rejects_bad_format() {
        assert!(Pin::parse("12a4").is_err());
        assert!(Pin::parse("123").is_err());
        assert!(Pin::parse("12345").is_err());
        assert!(Pin::parse(" 1234").is_err());
        assert!(Pin::parse("١٢٣٤").is_err());
    }

    #[test]
    fn test_pin_debug_is_redacted() {
        let pin = Pin::parse("1234").expect("valid pin");
        assert!(!format!("{:?}", pin).contains("1234"));
    }

    #[test]
    fn test_operation_type_parsing() {
        assert_eq!(OperationType::from_str("create"), Ok(OperationType::Create));
        assert_eq!(
            OperationType::from_str(" DEPOSIT "),
            Ok(OperationType::Deposit)
        );
        assert_eq!(
            OperationType::from_str("Withdraw"),
            Ok(OperationType::Withdraw)
        );
        assert!(OperationType::from_str("transfer").is_err());
    }
}
