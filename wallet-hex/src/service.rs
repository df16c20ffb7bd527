//! Ledger Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use tracing::{info, warn};
use wallet_types::{
    Account, AccountId, Favorite, FavoriteId, LedgerError, LedgerRepository, Money, Payment,
    PaymentCategory, PaymentId, Phone, RepoError,
};

use crate::config::{RejectPolicy, ServiceConfig};

/// Application service for wallet operations.
///
/// Generic over `R: LedgerRepository` - the adapter is injected at compile time.
/// Every operation checks all of its preconditions before it writes anything,
/// so a failed call leaves the ledger unchanged.
///
/// Mutating operations take `&mut self`; sharing a service between threads
/// needs a single lock around the whole service.
pub struct LedgerService<R: LedgerRepository> {
    repo: R,
    config: ServiceConfig,
}

impl<R: LedgerRepository> LedgerService<R> {
    /// Creates a new ledger service with the given repository.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, ServiceConfig::default())
    }

    /// Creates a ledger service with explicit configuration.
    pub fn with_config(repo: R, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Account Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a new account with zero balance.
    #[tracing::instrument(skip_all, fields(phone = %phone))]
    pub fn register_account(&mut self, phone: Phone) -> Result<Account, LedgerError> {
        if self.repo.find_account_by_phone(&phone)?.is_some() {
            warn!("phone already registered");
            return Err(LedgerError::PhoneAlreadyRegistered(phone));
        }

        let account = self.repo.create_account(phone.clone()).map_err(|e| match e {
            RepoError::Conflict(_) => LedgerError::PhoneAlreadyRegistered(phone),
            other => other.into(),
        })?;

        info!(account_id = %account.id, "account registered");
        Ok(account)
    }

    /// Adds funds to an account.
    #[tracing::instrument(skip_all, fields(account_id = %account_id, amount = %amount))]
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), LedgerError> {
        amount.ensure_positive()?;

        let mut account = self.find_account_by_id(account_id)?;
        account.credit(amount)?;
        self.repo.save_account(&account)?;

        info!(balance = %account.balance, "deposit applied");
        Ok(())
    }

    /// Gets an account by ID.
    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<Account, LedgerError> {
        self.repo
            .get_account(account_id)?
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    /// Gets an account by its phone number.
    pub fn find_account_by_phone(&self, phone: &Phone) -> Result<Account, LedgerError> {
        self.repo
            .find_account_by_phone(phone)?
            .ok_or_else(|| LedgerError::PhoneNotRegistered(phone.clone()))
    }

    /// Lists all accounts in registration order.
    pub fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        self.repo.list_accounts().map_err(Into::into)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Pays `amount` out of an account balance.
    #[tracing::instrument(skip_all, fields(account_id = %account_id, amount = %amount, category = %category))]
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: PaymentCategory,
    ) -> Result<Payment, LedgerError> {
        amount.ensure_positive()?;

        let mut account = self.find_account_by_id(account_id)?;
        if let Err(e) = account.debit(amount) {
            warn!(balance = %account.balance, "payment declined");
            return Err(e.into());
        }

        let payment = Payment::new(account_id, amount, category);
        self.repo.commit_payment(&account, &payment)?;

        info!(payment_id = %payment.id, balance = %account.balance, "payment made");
        Ok(payment)
    }

    /// Gets a payment by ID.
    pub fn find_payment_by_id(&self, payment_id: PaymentId) -> Result<Payment, LedgerError> {
        self.repo
            .get_payment(payment_id)?
            .ok_or(LedgerError::PaymentNotFound(payment_id))
    }

    /// Lists payments made from an account.
    pub fn list_payments(&self, account_id: AccountId) -> Result<Vec<Payment>, LedgerError> {
        // Verify account exists first
        let _ = self.find_account_by_id(account_id)?;

        self.repo
            .list_payments_for_account(account_id)
            .map_err(Into::into)
    }

    /// Marks a payment as failed and refunds its amount to the account.
    ///
    /// Under [`RejectPolicy::RefundAlways`] rejecting the same payment twice
    /// refunds twice.
    #[tracing::instrument(skip_all, fields(payment_id = %payment_id))]
    pub fn reject(&mut self, payment_id: PaymentId) -> Result<(), LedgerError> {
        let mut payment = self
            .find_payment_by_id(payment_id)
            .map_err(|_| LedgerError::PaymentNotFound(payment_id))?;

        let mut account = self
            .find_account_by_id(payment.account_id)
            .map_err(|_| LedgerError::AccountNotFound(payment.account_id))?;

        if payment.is_rejected() {
            match self.config.reject_policy {
                RejectPolicy::RefundOnce => {
                    warn!("payment already rejected");
                    return Err(LedgerError::PaymentAlreadyRejected(payment_id));
                }
                RejectPolicy::RefundAlways => {
                    warn!("payment already rejected, refunding again");
                }
            }
        }

        payment.reject();
        account.credit(payment.amount)?;
        self.repo.commit_payment(&account, &payment)?;

        info!(account_id = %account.id, balance = %account.balance, "payment rejected");
        Ok(())
    }

    /// Pays again with the account, amount and category of an earlier payment.
    ///
    /// The earlier payment is left untouched; a new one is created.
    #[tracing::instrument(skip_all, fields(payment_id = %payment_id))]
    pub fn repeat(&mut self, payment_id: PaymentId) -> Result<Payment, LedgerError> {
        let target = self
            .find_payment_by_id(payment_id)
            .map_err(|_| LedgerError::PaymentNotFound(payment_id))?;

        self.pay(target.account_id, target.amount, target.category)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────────

    /// Saves a payment as a named favorite.
    #[tracing::instrument(skip_all, fields(payment_id = %payment_id, name = %name))]
    pub fn favorite_payment(
        &mut self,
        payment_id: PaymentId,
        name: String,
    ) -> Result<Favorite, LedgerError> {
        let payment = self.find_payment_by_id(payment_id)?;

        let favorite = Favorite::from_payment(&payment, name);
        self.repo.insert_favorite(favorite.clone())?;

        info!(favorite_id = %favorite.id, "favorite saved");
        Ok(favorite)
    }

    /// Gets a favorite by ID.
    pub fn find_favorite_by_id(&self, favorite_id: FavoriteId) -> Result<Favorite, LedgerError> {
        self.repo
            .get_favorite(favorite_id)?
            .ok_or(LedgerError::FavoriteNotFound(favorite_id))
    }

    /// Lists favorites saved for an account.
    pub fn list_favorites(&self, account_id: AccountId) -> Result<Vec<Favorite>, LedgerError> {
        let _ = self.find_account_by_id(account_id)?;

        self.repo
            .list_favorites_for_account(account_id)
            .map_err(Into::into)
    }

    /// Makes a new payment from a favorite's stored values.
    #[tracing::instrument(skip_all, fields(favorite_id = %favorite_id))]
    pub fn pay_from_favorite(&mut self, favorite_id: FavoriteId) -> Result<Payment, LedgerError> {
        let favorite = self.find_favorite_by_id(favorite_id)?;

        self.pay(favorite.account_id, favorite.amount, favorite.category)
    }
}
