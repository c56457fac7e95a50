//! Session token strategies. Tokens are opaque to clients.

use chrono::Utc;

const TOKEN_BYTES: usize = 32;

/// Produces a fresh token for each activation event.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, username: &str) -> String;
}

/// 256 random bits, hex encoded. The username does not feed into the token.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenIssuer;

impl TokenIssuer for RandomTokenIssuer {
    fn issue(&self, _username: &str) -> String {
        let random_bytes: Vec<u8> = (0..TOKEN_BYTES).map(|_| rand::random::<u8>()).collect();
        const_hex::encode(random_bytes)
    }
}

/// `"{username}-{unix_nanos}"`.
///
/// Guessable, and two calls within the clock's resolution collide.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampTokenIssuer;

impl TokenIssuer for TimestampTokenIssuer {
    fn issue(&self, username: &str) -> String {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        format!("{}-{}", username, nanos)
    }
}
