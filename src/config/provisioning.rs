//! Provisioning workflow configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted session lifetime (30 days).
pub const MAX_SESSION_LIFETIME_SECS: u64 = 30 * 24 * 3600;

/// Settings for the account-created and account-authenticated hooks.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisioningConfig {
    /// Username of the account that receives signup notifications.
    /// Empty disables operator notifications.
    #[serde(default = "default_operator_username")]
    pub operator_username: String,

    /// Session lifetime set on every login, in seconds
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime_secs: u64,

    /// Verb attached to signup notifications
    #[serde(default = "default_signup_verb")]
    pub signup_notification_verb: String,

    /// Message shown to the user when the payment customer cannot be created
    #[serde(default = "default_billing_failure_message")]
    pub billing_failure_message: String,
}

impl ProvisioningConfig {
    pub fn session_lifetime(&self) -> Duration {
        Duration::from_secs(self.session_lifetime_secs)
    }

    /// Validate provisioning configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_lifetime_secs == 0 || self.session_lifetime_secs > MAX_SESSION_LIFETIME_SECS {
            return Err(ValidationError::InvalidSessionLifetime(
                self.session_lifetime_secs,
            ));
        }
        if self.signup_notification_verb.trim().is_empty() {
            return Err(ValidationError::MissingRequired(
                "ACCOUNTS__PROVISIONING__SIGNUP_NOTIFICATION_VERB",
            ));
        }
        Ok(())
    }
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            operator_username: default_operator_username(),
            session_lifetime_secs: default_session_lifetime(),
            signup_notification_verb: default_signup_verb(),
            billing_failure_message: default_billing_failure_message(),
        }
    }
}

fn default_operator_username() -> String {
    "admin".to_string()
}

fn default_session_lifetime() -> u64 {
    3600
}

fn default_signup_verb() -> String {
    crate::domain::notification::NEW_USER_VERB.to_string()
}

fn default_billing_failure_message() -> String {
    "There was an error with your account. Please contact us.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioning_defaults() {
        let config = ProvisioningConfig::default();
        assert_eq!(config.operator_username, "admin");
        assert_eq!(config.session_lifetime(), Duration::from_secs(3600));
        assert_eq!(config.signup_notification_verb, "New User Created");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_session_lifetime_rejected() {
        let config = ProvisioningConfig {
            session_lifetime_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSessionLifetime(0))
        ));
    }

    #[test]
    fn test_overlong_session_lifetime_rejected() {
        let config = ProvisioningConfig {
            session_lifetime_secs: MAX_SESSION_LIFETIME_SECS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_verb_rejected() {
        let config = ProvisioningConfig {
            signup_notification_verb: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_operator_is_allowed() {
        let config = ProvisioningConfig {
            operator_username: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
