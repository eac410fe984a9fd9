//! Account value objects: username, email address and password hash.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum stored length of usernames and email addresses.
pub const MAX_IDENTITY_LENGTH: usize = 255;

/// Prefix marking a password hash that can never verify.
const UNUSABLE_PASSWORD_PREFIX: char = '!';

/// Login name, unique across all accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Creates a username, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if nothing remains after trimming
    /// - `TooLong` if longer than 255 characters
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if trimmed.chars().count() > MAX_IDENTITY_LENGTH {
            return Err(ValidationError::too_long("username", MAX_IDENTITY_LENGTH));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Normalized email address.
///
/// Normalization lowercases the domain part and keeps the local part as
/// written, since mailbox names may be case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if blank
    /// - `TooLong` if longer than 255 characters
    /// - `InvalidFormat` if there is not exactly one `@` separating a
    ///   non-empty local part from a non-empty domain
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if trimmed.chars().count() > MAX_IDENTITY_LENGTH {
            return Err(ValidationError::too_long("email", MAX_IDENTITY_LENGTH));
        }

        let (local, domain) = trimmed
            .rsplit_once('@')
            .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;

        if local.is_empty() || domain.is_empty() {
            return Err(ValidationError::invalid_format(
                "email",
                "local part and domain are required",
            ));
        }
        if local.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "multiple @ symbols",
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "email",
                "whitespace is not allowed",
            ));
        }

        Ok(Self(format!("{}@{}", local, domain.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local part (before the `@`), case preserved.
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Domain part (after the `@`), lowercased.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
    }

    /// Fully lowercased form used for case-insensitive uniqueness checks.
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Stored one-way password hash (PHC string format).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an already-computed hash string.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// A hash that no password verifies against.
    pub fn unusable() -> Self {
        Self(format!("{}{}", UNUSABLE_PASSWORD_PREFIX, uuid::Uuid::new_v4().simple()))
    }

    pub fn is_usable(&self) -> bool {
        !self.0.starts_with(UNUSABLE_PASSWORD_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn username_is_trimmed() {
        let username = Username::new("  bob ").unwrap();
        assert_eq!(username.as_str(), "bob");
    }

    #[test]
    fn username_rejects_blank() {
        assert_eq!(
            Username::new("   "),
            Err(ValidationError::empty_field("username"))
        );
    }

    #[test]
    fn username_rejects_overlong() {
        let raw = "a".repeat(MAX_IDENTITY_LENGTH + 1);
        assert!(matches!(
            Username::new(raw),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn email_lowercases_domain_only() {
        let email = EmailAddress::new("John.Doe@Example.COM").unwrap();
        assert_eq!(email.as_str(), "John.Doe@example.com");
        assert_eq!(email.local_part(), "John.Doe");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn email_rejects_empty() {
        assert_eq!(
            EmailAddress::new(""),
            Err(ValidationError::empty_field("email"))
        );
    }

    #[test]
    fn email_rejects_missing_at() {
        assert!(matches!(
            EmailAddress::new("nobody.example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn email_rejects_missing_domain() {
        assert!(EmailAddress::new("bob@").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
    }

    #[test]
    fn email_lookup_key_is_case_insensitive() {
        let a = EmailAddress::new("Bob@Example.com").unwrap();
        let b = EmailAddress::new("bob@example.com").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.lookup_key(), b.lookup_key());
    }

    #[test]
    fn email_deserialization_normalizes() {
        let email: EmailAddress = serde_json::from_str("\"a@B.COM\"").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn unusable_password_is_flagged() {
        assert!(!PasswordHash::unusable().is_usable());
        assert!(PasswordHash::from_hash("$argon2id$v=19$...").is_usable());
    }

    #[test]
    fn password_hash_debug_hides_value() {
        let hash = PasswordHash::from_hash("$argon2id$secret");
        assert!(!format!("{:?}", hash).contains("secret"));
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(local in "[A-Za-z0-9._%+-]{1,20}", domain in "[A-Za-z0-9-]{1,20}\\.[A-Za-z]{2,6}") {
            let once = EmailAddress::new(format!("{}@{}", local, domain)).unwrap();
            let twice = EmailAddress::new(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalization_preserves_local_part(local in "[A-Za-z0-9._%+-]{1,20}", domain in "[A-Za-z0-9-]{1,20}\\.[A-Za-z]{2,6}") {
            let email = EmailAddress::new(format!("{}@{}", local, domain)).unwrap();
            prop_assert_eq!(email.local_part(), local.as_str());
            prop_assert_eq!(email.domain().to_string(), domain.to_lowercase());
        }
    }
}
