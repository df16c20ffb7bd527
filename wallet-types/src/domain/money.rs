//! Integer monetary value in minor currency units.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Money amount stored in the smallest currency unit (cents, dirams, etc.)
/// to avoid floating-point precision issues.
///
/// A `Money` may hold zero or a negative value so that callers can hand
/// arbitrary input to the ledger; the ledger rejects non-positive amounts
/// where an operation requires them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Creates a zero-value Money.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in smallest currency unit.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Fails with `AmountMustBePositive` unless the amount is above zero.
    pub fn ensure_positive(&self) -> Result<(), DomainError> {
        if self.is_positive() {
            Ok(())
        } else {
            Err(DomainError::AmountMustBePositive)
        }
    }

    /// Checked addition - returns error if the result would overflow.
    pub fn checked_add(&self, other: Money) -> Result<Money, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(DomainError::BalanceOverflow)
    }

    /// Checked subtraction - returns error if the result would be negative.
    pub fn checked_sub(&self, other: Money) -> Result<Money, DomainError> {
        if self.0 < other.0 {
            return Err(DomainError::InsufficientBalance {
                available: *self,
                requested: other,
            });
        }
        Ok(Money(self.0 - other.0))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let money = Money::new(1000);
        assert_eq!(money.amount(), 1000);
        assert!(money.is_positive());
    }

    #[test]
    fn test_non_positive_money_is_rejected() {
        assert_eq!(
            Money::zero().ensure_positive(),
            Err(DomainError::AmountMustBePositive)
        );
        assert_eq!(
            Money::new(-100).ensure_positive(),
            Err(DomainError::AmountMustBePositive)
        );
    }

    #[test]
    fn test_money_addition() {
        let sum = Money::new(100).checked_add(Money::new(50)).unwrap();
        assert_eq!(sum.amount(), 150);
    }

    #[test]
    fn test_money_addition_overflow_fails() {
        let result = Money::new(i64::MAX).checked_add(Money::new(1));
        assert_eq!(result, Err(DomainError::BalanceOverflow));
    }

    #[test]
    fn test_money_subtraction_to_zero() {
        let rest = Money::new(100).checked_sub(Money::new(100)).unwrap();
        assert_eq!(rest, Money::zero());
    }

    #[test]
    fn test_money_subtraction_below_zero_fails() {
        let result = Money::new(100).checked_sub(Money::new(101));
        assert!(matches!(result, Err(DomainError::InsufficientBalance { .. })));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1050).to_string(), "1050");
        assert_eq!(Money::new(5).to_string(), "5");
        assert_eq!(Money::new(-250).to_string(), "-250");
    }
}
