//! # Wallet Hex
//!
//! Application service layer for the wallet ledger.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `config/` - Behaviour switches for the service
//!
//! The service is generic over `R: LedgerRepository`, allowing
//! different repository implementations to be injected.

pub mod config;
pub mod service;


pub use config::{RejectPolicy, ServiceConfig};
pub use service::LedgerService;
