//! # Wallet Repository
//!
//! Concrete repository implementations (adapters) for the wallet ledger.
//! This crate provides adapters that implement the `LedgerRepository` port.

pub mod memory;


pub use memory::InMemoryRepo;
