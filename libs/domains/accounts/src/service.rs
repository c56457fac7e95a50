use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::config::AccountsConfig;
use crate::error::{AccountError, AccountResult};
use crate::hasher::{Argon2Hasher, CredentialHasher};
use crate::models::{Account, AccountResponse, CreateAccount};
use crate::repository::AccountStore;
use crate::token::{RandomTokenIssuer, TokenIssuer};

/// Account lifecycle: create, activate, deactivate, remove.
///
/// Every read-modify-write against the store runs under one service-wide
/// lock, so concurrent requests for the same username cannot lose updates.
/// Clones share the store, strategies and lock.
pub struct AccountService<S: AccountStore> {
    store: Arc<S>,
    hasher: Arc<dyn CredentialHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
    write_lock: Arc<Mutex<()>>,
}

impl<S: AccountStore> Clone for AccountService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: Arc::clone(&self.hasher),
            token_issuer: Arc::clone(&self.token_issuer),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<S: AccountStore> AccountService<S> {
    /// Argon2 digests and random tokens
    pub fn new(store: S) -> Self {
        Self::with_strategies(store, Arc::new(Argon2Hasher::new()), Arc::new(RandomTokenIssuer))
    }

    pub fn with_strategies(
        store: S,
        hasher: Arc<dyn CredentialHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store: Arc::new(store),
            hasher,
            token_issuer,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn from_config(store: S, config: &AccountsConfig) -> Self {
        Self::with_strategies(store, config.hasher.build(), config.token_issuer.build())
    }

    /// Register an account. The new account is immediately active.
    ///
    /// An existing account with the same username is replaced.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_account(&self, input: CreateAccount) -> AccountResult<AccountResponse> {
        self.validate_create(&input)?;

        let credential_digest = self.hasher.hash(&input.password)?;
        let token = self.token_issuer.issue(&input.username);
        let account = Account::new(input.username, credential_digest, token);

        let _guard = self.write_lock.lock().await;

        if self.store.get(&account.username).await?.is_some() {
            warn!("Overwriting existing account");
        }
        self.store.put(account.clone()).await?;

        info!("Created account");
        Ok(account.into())
    }

    /// Issue a new token, replacing any previous one
    #[instrument(skip(self))]
    pub async fn activate_account(&self, username: &str) -> AccountResult<AccountResponse> {
        let _guard = self.write_lock.lock().await;

        let mut account = self.find(username).await?;
        account.activate(self.token_issuer.issue(username));
        self.store.put(account.clone()).await?;

        info!("Activated account");
        Ok(account.into())
    }

    /// Clear the account's token
    #[instrument(skip(self))]
    pub async fn deactivate_account(&self, username: &str) -> AccountResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut account = self.find(username).await?;
        account.deactivate();
        self.store.put(account).await?;

        info!("Deactivated account");
        Ok(())
    }

    /// Delete the account. Removing an unknown username succeeds.
    #[instrument(skip(self))]
    pub async fn remove_account(&self, username: &str) -> AccountResult<()> {
        let _guard = self.write_lock.lock().await;

        if self.store.delete(username).await? {
            info!("Removed account");
        } else {
            info!("Remove requested for unknown account");
        }
        Ok(())
    }

    /// Current username and token; the token is empty when inactive
    pub async fn get_account(&self, username: &str) -> AccountResult<AccountResponse> {
        Ok(self.find(username).await?.into())
    }

    /// Check a password against the stored digest
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AccountResult<bool> {
        let account = self.find(username).await?;
        self.hasher.verify(password, &account.credential_digest)
    }

    /// Number of stored accounts
    pub async fn account_count(&self) -> AccountResult<usize> {
        self.store.count().await
    }

    async fn find(&self, username: &str) -> AccountResult<Account> {
        self.store
            .get(username)
            .await?
            .ok_or_else(|| AccountError::NotFound(username.to_string()))
    }

    // Username problems are reported ahead of password problems.
    fn validate_create(&self, input: &CreateAccount) -> AccountResult<()> {
        let Err(errors) = input.validate() else {
            return Ok(());
        };

        let fields = errors.field_errors();
        if fields.contains_key("username") {
            Err(AccountError::InvalidUsername)
        } else if fields.contains_key("password") {
            Err(AccountError::InvalidPassword)
        } else {
            Err(AccountError::Internal(errors.to_string()))
        }
    }
}
