//! Accounts Domain
//!
//! Account lifecycle for a small username/token service: accounts are
//! created, activated (issued a fresh token), deactivated (token cleared)
//! and removed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/addUser, /activateUser/{username}, ...)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Lifecycle, validation, write serialisation
//! └──┬───────┬──┘
//!    │       │
//!    │  ┌────▼──────────────────┐
//!    │  │ Hasher / TokenIssuer  │  ← Pluggable strategies
//!    │  └───────────────────────┘
//! ┌──▼──────────┐
//! │ Repository  │  ← AccountStore trait + in-memory implementation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_accounts::{handlers, AccountService, InMemoryAccountStore};
//!
//! let service = AccountService::new(InMemoryAccountStore::new());
//! let router = handlers::router(service);
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod hasher;
pub mod models;
pub mod repository;
pub mod service;
pub mod token;
pub mod validation;

pub use config::{AccountsConfig, HasherKind, TokenIssuerKind};
pub use error::{AccountError, AccountResult};
pub use hasher::{Argon2Hasher, CredentialHasher, Sha256Hasher};
pub use models::{Account, AccountResponse, CreateAccount};
pub use repository::{AccountStore, InMemoryAccountStore};
pub use service::AccountService;
pub use token::{RandomTokenIssuer, TimestampTokenIssuer, TokenIssuer};
pub use validation::{is_valid_password, is_valid_username};
