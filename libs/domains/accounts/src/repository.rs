use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AccountResult;
use crate::models::Account;

/// Storage for account records, keyed by username
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Get a copy of the account stored under `username`
    async fn get(&self, username: &str) -> AccountResult<Option<Account>>;

    /// Insert or overwrite the record under `account.username`
    async fn put(&self, account: Account) -> AccountResult<()>;

    /// Remove a record. Returns whether one existed.
    async fn delete(&self, username: &str) -> AccountResult<bool>;

    /// Number of stored accounts
    async fn count(&self) -> AccountResult<usize>;
}

/// Process-local store; all data is lost on restart
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get(&self, username: &str) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(username).cloned())
    }

    async fn put(&self, account: Account) -> AccountResult<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.username.clone(), account);
        Ok(())
    }

    async fn delete(&self, username: &str) -> AccountResult<bool> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(username).is_some())
    }

    async fn count(&self) -> AccountResult<usize> {
        Ok(self.accounts.read().await.len())
    }
}
