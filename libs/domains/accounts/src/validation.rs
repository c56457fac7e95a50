//! Shape checks for usernames and passwords.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, counted in bytes
pub const MIN_PASSWORD_LEN: usize = 6;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// A username is one or more ASCII letters, digits, `_` or `-`.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// A password is valid when it is at least [`MIN_PASSWORD_LEN`] bytes long.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}

/// `validator` rule wrapping [`is_valid_username`]
pub(crate) fn validate_username(username: &str) -> Result<(), validator::ValidationError> {
    if !is_valid_username(username) {
        return Err(validator::ValidationError::new("invalid_username"));
    }
    Ok(())
}

/// `validator` rule wrapping [`is_valid_password`]
pub(crate) fn validate_password(password: &str) -> Result<(), validator::ValidationError> {
    if !is_valid_password(password) {
        return Err(validator::ValidationError::new("invalid_password"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_allowed_characters() {
        for name in ["alice", "Bob_42", "a-b-c", "_", "-", "Z9", "under_score-dash"] {
            assert!(is_valid_username(name), "{name:?} should be valid");
        }
    }

    #[test]
    fn test_username_rejects_other_characters() {
        for name in ["al ice", "alice!", "ali.ce", "a/b", "émile", "tab\there", "alice\n"] {
            assert!(!is_valid_username(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_username_rejects_empty() {
        assert!(!is_valid_username(""));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("ab"));
        assert!(!is_valid_password("12345"));
        assert!(is_valid_password("123456"));
        assert!(is_valid_password("a much longer passphrase"));
    }

    #[test]
    fn test_password_length_counts_bytes() {
        // three two-byte characters
        assert!(is_valid_password("ééé"));
        // five characters, five bytes
        assert!(!is_valid_password("abcde"));
    }

    #[test]
    fn test_validator_rules_report_codes() {
        assert!(validate_username("ok_name").is_ok());
        assert_eq!(validate_username("bad name").unwrap_err().code, "invalid_username");
        assert!(validate_password("secret1").is_ok());
        assert_eq!(validate_password("ab").unwrap_err().code, "invalid_password");
    }
}
