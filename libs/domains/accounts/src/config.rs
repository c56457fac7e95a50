use core_config::{env_or_default, ConfigError, FromEnv};
use std::str::FromStr;
use std::sync::Arc;
use strum::{Display, EnumString};

use crate::hasher::{Argon2Hasher, CredentialHasher, Sha256Hasher};
use crate::token::{RandomTokenIssuer, TimestampTokenIssuer, TokenIssuer};

/// Digest algorithm used for stored credentials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HasherKind {
    #[default]
    Argon2,
    Sha256,
}

impl HasherKind {
    pub fn build(self) -> Arc<dyn CredentialHasher> {
        match self {
            HasherKind::Argon2 => Arc::new(Argon2Hasher::new()),
            HasherKind::Sha256 => Arc::new(Sha256Hasher),
        }
    }
}

/// Token generation scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TokenIssuerKind {
    #[default]
    Random,
    Timestamp,
}

impl TokenIssuerKind {
    pub fn build(self) -> Arc<dyn TokenIssuer> {
        match self {
            TokenIssuerKind::Random => Arc::new(RandomTokenIssuer),
            TokenIssuerKind::Timestamp => Arc::new(TimestampTokenIssuer),
        }
    }
}

/// Strategy selection for the account service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountsConfig {
    pub hasher: HasherKind,
    pub token_issuer: TokenIssuerKind,
}

fn parse_kind<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError> {
    let value = env_or_default(key, default);
    value.parse().map_err(|_| ConfigError::ParseError {
        key: key.to_string(),
        details: format!("unsupported value '{}'", value),
    })
}

impl FromEnv for AccountsConfig {
    /// - ACCOUNTS_HASHER: `argon2` (default) or `sha256`
    /// - ACCOUNTS_TOKEN_ISSUER: `random` (default) or `timestamp`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            hasher: parse_kind("ACCOUNTS_HASHER", &HasherKind::default().to_string())?,
            token_issuer: parse_kind(
                "ACCOUNTS_TOKEN_ISSUER",
                &TokenIssuerKind::default().to_string(),
            )?,
        })
    }
}
