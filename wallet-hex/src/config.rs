//! Service configuration.

use std::fmt;
use std::str::FromStr;

/// What `reject` does with a payment that is already failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RejectPolicy {
    /// Refund on every call, even if the payment was already rejected.
    #[default]
    RefundAlways,
    /// Refund once; later calls fail with `PaymentAlreadyRejected`.
    RefundOnce,
}

impl fmt::Display for RejectPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectPolicy::RefundAlways => write!(f, "refund-always"),
            RejectPolicy::RefundOnce => write!(f, "refund-once"),
        }
    }
}

impl FromStr for RejectPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "refund-always" | "always" => Ok(RejectPolicy::RefundAlways),
            "refund-once" | "once" => Ok(RejectPolicy::RefundOnce),
            other => Err(format!(
                "Unknown reject policy: {}. Supported: refund-always, refund-once",
                other
            )),
        }
    }
}

/// Behaviour switches for [`LedgerService`](crate::LedgerService).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub reject_policy: RejectPolicy,
}

impl ServiceConfig {
    pub fn with_reject_policy(mut self, reject_policy: RejectPolicy) -> Self {
        self.reject_policy = reject_policy;
        self
    }
}
