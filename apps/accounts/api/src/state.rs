//! Shared application state.

use domain_accounts::{AccountService, InMemoryAccountStore};

/// Cloned into every handler; all fields are cheap `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Account lifecycle service over the process-local store
    pub accounts: AccountService<InMemoryAccountStore>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let accounts = AccountService::from_config(InMemoryAccountStore::new(), &config.accounts);
        Self { config, accounts }
    }
}
