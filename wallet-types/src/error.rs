//! Error types for the wallet ledger.

use crate::domain::{AccountId, FavoriteId, Money, PaymentId, Phone};

/// Domain-level errors (business rule violations on a single record).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Amount must be greater than zero")]
    AmountMustBePositive,

    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: Money, requested: Money },

    #[error("Balance overflow")]
    BalanceOverflow,
}

/// Repository-level errors (data access failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors returned by ledger service operations.
///
/// Every operation fails with exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Phone already registered: {0}")]
    PhoneAlreadyRegistered(Phone),

    #[error("Phone not registered: {0}")]
    PhoneNotRegistered(Phone),

    #[error("Amount must be greater than zero")]
    AmountMustBePositive,

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: Money, requested: Money },

    #[error("Balance overflow")]
    BalanceOverflow,

    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    #[error("Payment already rejected: {0}")]
    PaymentAlreadyRejected(PaymentId),

    #[error("Favorite not found: {0}")]
    FavoriteNotFound(FavoriteId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<DomainError> for LedgerError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AmountMustBePositive => LedgerError::AmountMustBePositive,
            DomainError::InsufficientBalance {
                available,
                requested,
            } => LedgerError::InsufficientBalance {
                available,
                requested,
            },
            DomainError::BalanceOverflow => LedgerError::BalanceOverflow,
        }
    }
}

impl From<RepoError> for LedgerError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => LedgerError::Storage("record disappeared from store".into()),
            RepoError::Conflict(e) => LedgerError::Storage(e),
            RepoError::Storage(e) => LedgerError::Storage(e),
        }
    }
}
