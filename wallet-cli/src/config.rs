//! Configuration loading from arguments and environment.

use std::path::PathBuf;

use clap::Parser;
use wallet_hex::{RejectPolicy, ServiceConfig};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,wallet_cli=info,wallet_hex=info";

/// Application configuration.
///
/// Every option can also come from the environment (or a `.env` file).
#[derive(Debug, Parser)]
#[command(name = "wallet")]
#[command(author, version, about = "In-memory wallet ledger session", long_about = None)]
pub struct Config {
    /// Read commands from this file instead of stdin
    #[arg(long, env = "WALLET_SCRIPT")]
    pub script: Option<PathBuf>,

    /// What rejecting an already rejected payment does (refund-always, refund-once)
    #[arg(long, env = "WALLET_REJECT_POLICY", default_value_t = RejectPolicy::RefundAlways)]
    pub reject_policy: RejectPolicy,

    /// Stop at the first failing command and exit non-zero
    #[arg(long, env = "WALLET_FAIL_FAST")]
    pub fail_fast: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "WALLET_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    /// Builds the ledger service configuration.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::default().with_reject_policy(self.reject_policy)
    }
}
