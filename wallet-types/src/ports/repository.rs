//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (InMemory today, anything durable later) implement this trait.

use crate::domain::{Account, AccountId, Favorite, FavoriteId, Payment, PaymentId, Phone};
use crate::error::RepoError;

/// The storage port for ledger records.
///
/// Lookups hand back owned snapshots; callers write changes back explicitly.
/// Collections keep insertion order and lookups return the first match.
pub trait LedgerRepository {
    // ─────────────────────────────────────────────────────────────────────────────
    // Account Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a new account with zero balance under the next sequential id.
    ///
    /// Returns `RepoError::Conflict` if the phone is already taken. A failed
    /// call does not consume an id.
    fn create_account(&mut self, phone: Phone) -> Result<Account, RepoError>;

    /// Gets an account by ID.
    fn get_account(&self, id: AccountId) -> Result<Option<Account>, RepoError>;

    /// Gets an account by phone number.
    fn find_account_by_phone(&self, phone: &Phone) -> Result<Option<Account>, RepoError>;

    /// Lists all accounts in registration order.
    fn list_accounts(&self) -> Result<Vec<Account>, RepoError>;

    /// Replaces the stored account that has the same id.
    fn save_account(&mut self, account: &Account) -> Result<(), RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Writes a balance change together with the payment that caused it.
    ///
    /// The account must already exist. The payment is inserted, or replaced
    /// if one with the same id is stored. Implementations MUST apply both
    /// writes or neither.
    fn commit_payment(&mut self, account: &Account, payment: &Payment) -> Result<(), RepoError>;

    /// Gets a payment by ID.
    fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError>;

    /// Lists payments for an account in creation order.
    fn list_payments_for_account(&self, account_id: AccountId)
    -> Result<Vec<Payment>, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────────

    /// Stores a new favorite.
    fn insert_favorite(&mut self, favorite: Favorite) -> Result<(), RepoError>;

    /// Gets a favorite by ID.
    fn get_favorite(&self, id: FavoriteId) -> Result<Option<Favorite>, RepoError>;

    /// Lists favorites for an account in creation order.
    fn list_favorites_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Favorite>, RepoError>;
}
