//! Favorite payment template.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountId;
use super::money::Money;
use super::payment::{Payment, PaymentCategory};

/// Unique identifier for a Favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(Uuid);

impl FavoriteId {
    /// Creates a new random FavoriteId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FavoriteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FavoriteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named snapshot of a payment that can be paid again later.
///
/// Favorites are immutable once created. They copy the payment's values,
/// so later changes to the source payment never leak into them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: PaymentCategory,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Snapshots `payment` under the given name.
    pub fn from_payment(payment: &Payment, name: String) -> Self {
        Self {
            id: FavoriteId::new(),
            account_id: payment.account_id,
            name,
            amount: payment.amount,
            category: payment.category.clone(),
            created_at: Utc::now(),
        }
    }
}
