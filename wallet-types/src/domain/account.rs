//! Account domain model.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::DomainError;

/// Sequential identifier for an Account, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// The id handed to the first registered account.
    pub const FIRST: AccountId = AccountId(1);

    /// Wraps a raw id value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the id issued right after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Phone number identifying an account holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phone {
    fn from(phone: &str) -> Self {
        Self(phone.to_string())
    }
}

impl From<String> for Phone {
    fn from(phone: String) -> Self {
        Self(phone)
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet account holding a balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Sequential identifier
    pub id: AccountId,
    /// Phone number, unique across accounts
    pub phone: Phone,
    /// Current balance in minor units
    pub balance: Money,
}

impl Account {
    /// Creates a new account with zero balance.
    pub fn new(id: AccountId, phone: Phone) -> Self {
        Self {
            id,
            phone,
            balance: Money::zero(),
        }
    }

    /// Credits (adds) money to the account.
    pub fn credit(&mut self, amount: Money) -> Result<(), DomainError> {
        amount.ensure_positive()?;
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    /// Debits (subtracts) money from the account.
    pub fn debit(&mut self, amount: Money) -> Result<(), DomainError> {
        amount.ensure_positive()?;
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(AccountId::FIRST, Phone::from("+992000000001"))
    }

    #[test]
    fn test_account_creation() {
        let account = account();
        assert_eq!(account.id.value(), 1);
        assert_eq!(account.phone.as_str(), "+992000000001");
        assert_eq!(account.balance, Money::zero());
    }

    #[test]
    fn test_account_credit() {
        let mut account = account();
        account.credit(Money::new(1000)).unwrap();
        assert_eq!(account.balance.amount(), 1000);
    }

    #[test]
    fn test_account_credit_zero_fails() {
        let mut account = account();
        let result = account.credit(Money::zero());
        assert_eq!(result, Err(DomainError::AmountMustBePositive));
        assert_eq!(account.balance, Money::zero());
    }

    #[test]
    fn test_account_debit() {
        let mut account = account();
        account.credit(Money::new(1000)).unwrap();
        account.debit(Money::new(300)).unwrap();
        assert_eq!(account.balance.amount(), 700);
    }

    #[test]
    fn test_insufficient_funds() {
        let mut account = account();
        account.credit(Money::new(100)).unwrap();
        let result = account.debit(Money::new(200));
        assert!(matches!(result, Err(DomainError::InsufficientBalance { .. })));
        assert_eq!(account.balance.amount(), 100);
    }

    #[test]
    fn test_account_credit_overflow_keeps_balance() {
        let mut account = account();
        account.credit(Money::new(i64::MAX)).unwrap();
        let result = account.credit(Money::new(1));
        assert_eq!(result, Err(DomainError::BalanceOverflow));
        assert_eq!(account.balance.amount(), i64::MAX);
    }

    #[test]
    fn test_account_id_sequence_and_parse() {
        assert_eq!(AccountId::FIRST.next(), AccountId::new(2));
        assert_eq!(" 42 ".parse::<AccountId>().unwrap(), AccountId::new(42));
        assert!("abc".parse::<AccountId>().is_err());
    }
}
