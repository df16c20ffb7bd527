//! Payment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountId;
use super::money::Money;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Free-form label describing what a payment was for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentCategory(String);

impl PaymentCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PaymentCategory {
    fn from(category: &str) -> Self {
        Self(category.to_string())
    }
}

impl From<String> for PaymentCategory {
    fn from(category: String) -> Self {
        Self(category)
    }
}

impl std::fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a payment.
///
/// Payments start `InProgress` and can only move to `Fail` through a
/// rejection. There is no completed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[default]
    InProgress,
    Fail,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::InProgress => write!(f, "INPROGRESS"),
            PaymentStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// A payment made from an account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Account the amount was debited from
    pub account_id: AccountId,
    /// Amount paid in minor units
    pub amount: Money,
    /// What the payment was for
    pub category: PaymentCategory,
    /// Current status
    pub status: PaymentStatus,
    /// When the payment was made
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new in-progress payment with a fresh id.
    pub fn new(account_id: AccountId, amount: Money, category: PaymentCategory) -> Self {
        Self {
            id: PaymentId::new(),
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
            created_at: Utc::now(),
        }
    }

    /// Marks the payment as failed.
    pub fn reject(&mut self) {
        self.status = PaymentStatus::Fail;
    }

    pub fn is_rejected(&self) -> bool {
        self.status == PaymentStatus::Fail
    }
}
