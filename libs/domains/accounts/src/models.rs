use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_password, validate_username};

/// Account record owned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Unique, immutable identifier
    pub username: String,
    /// Stored password digest (never exposed in API responses)
    #[serde(skip_serializing)]
    pub credential_digest: String,
    /// Session token; present iff the account is active
    pub active_token: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// New accounts start out active with the token issued at creation.
    pub fn new(username: String, credential_digest: String, token: String) -> Self {
        let now = Utc::now();
        Self {
            username,
            credential_digest,
            active_token: Some(token),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_token.is_some()
    }

    /// Replace any previous token with a freshly issued one
    pub fn activate(&mut self, token: String) {
        self.active_token = Some(token);
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.active_token = None;
        self.updated_at = Utc::now();
    }
}

/// Response body for create and activate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub username: String,
    /// Opaque session token; empty when the account is inactive
    pub token: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            token: account.active_token.unwrap_or_default(),
        }
    }
}

/// Request body for `POST /addUser`
///
/// Missing fields decode as empty strings and are then rejected by validation.
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAccount {
    #[serde(default)]
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl CreateAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
