//! # Wallet Types
//!
//! Domain types and port traits for the wallet ledger.
//! This crate has ZERO IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, Account, Payment, Favorite)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain, repository and ledger error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, Favorite, FavoriteId, Money, Payment, PaymentCategory, PaymentId,
    PaymentStatus, Phone,
};
pub use error::{DomainError, LedgerError, RepoError};
pub use ports::LedgerRepository;
