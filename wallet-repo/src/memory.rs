//! In-process repository adapter.
//!
//! Records live in insertion-ordered vectors and every lookup is a linear
//! scan returning the first match. Nothing survives the process.

use tracing::debug;
use wallet_types::{
    Account, AccountId, Favorite, FavoriteId, LedgerRepository, Payment, PaymentId, Phone,
    RepoError,
};

/// In-memory implementation of [`LedgerRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryRepo {
    next_account_id: AccountId,
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    favorites: Vec<Favorite>,
}

impl InMemoryRepo {
    /// Creates an empty repository; the first account gets id 1.
    pub fn new() -> Self {
        Self {
            next_account_id: AccountId::FIRST,
            accounts: Vec::new(),
            payments: Vec::new(),
            favorites: Vec::new(),
        }
    }

    fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerRepository for InMemoryRepo {
    fn create_account(&mut self, phone: Phone) -> Result<Account, RepoError> {
        if self.accounts.iter().any(|a| a.phone == phone) {
            return Err(RepoError::Conflict(format!(
                "phone {} already registered",
                phone
            )));
        }

        let account = Account::new(self.next_account_id, phone);
        self.next_account_id = self.next_account_id.next();
        self.accounts.push(account.clone());

        debug!(account_id = %account.id, "account stored");
        Ok(account)
    }

    fn get_account(&self, id: AccountId) -> Result<Option<Account>, RepoError> {
        Ok(self.accounts.iter().find(|a| a.id == id).cloned())
    }

    fn find_account_by_phone(&self, phone: &Phone) -> Result<Option<Account>, RepoError> {
        Ok(self.accounts.iter().find(|a| &a.phone == phone).cloned())
    }

    fn list_accounts(&self) -> Result<Vec<Account>, RepoError> {
        Ok(self.accounts.clone())
    }

    fn save_account(&mut self, account: &Account) -> Result<(), RepoError> {
        let stored = self.account_mut(account.id).ok_or(RepoError::NotFound)?;
        *stored = account.clone();
        Ok(())
    }

    fn commit_payment(&mut self, account: &Account, payment: &Payment) -> Result<(), RepoError> {
        // Check the account first so a missing one leaves the payments untouched.
        let stored = self.account_mut(account.id).ok_or(RepoError::NotFound)?;
        *stored = account.clone();

        match self.payments.iter_mut().find(|p| p.id == payment.id) {
            Some(existing) => *existing = payment.clone(),
            None => self.payments.push(payment.clone()),
        }

        debug!(payment_id = %payment.id, status = %payment.status, "payment stored");
        Ok(())
    }

    fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        Ok(self.payments.iter().find(|p| p.id == id).cloned())
    }

    fn list_payments_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Payment>, RepoError> {
        Ok(self
            .payments
            .iter()
            .filter(|p| p.account_id == account_id)
            .cloned()
            .collect())
    }

    fn insert_favorite(&mut self, favorite: Favorite) -> Result<(), RepoError> {
        debug!(favorite_id = %favorite.id, "favorite stored");
        self.favorites.push(favorite);
        Ok(())
    }

    fn get_favorite(&self, id: FavoriteId) -> Result<Option<Favorite>, RepoError> {
        Ok(self.favorites.iter().find(|f| f.id == id).cloned())
    }

    fn list_favorites_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Favorite>, RepoError> {
        Ok(self
            .favorites
            .iter()
            .filter(|f| f.account_id == account_id)
            .cloned()
            .collect())
    }
}
