//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ACCOUNTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use accounts::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Operator account: {}", config.provisioning.operator_username);
//! ```

mod database;
mod error;
mod logging;
mod payment;
mod provisioning;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LoggingConfig};
pub use payment::PaymentConfig;
pub use provisioning::{ProvisioningConfig, MAX_SESSION_LIFETIME_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Payment configuration (Stripe). Only account commands need it, so
    /// an absent section loads and fails in [`AppConfig::validate`].
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Provisioning workflow settings (operator, session lifetime, messages)
    #[serde(default)]
    pub provisioning: ProvisioningConfig,

    /// Logging configuration (environment, filter)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ACCOUNTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ACCOUNTS__DATABASE__URL=...` -> `database.url = ...`
    /// - `ACCOUNTS__PROVISIONING__OPERATOR_USERNAME=ops` -> `provisioning.operator_username = "ops"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ACCOUNTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_storage()?;
        self.payment.validate()?;
        self.provisioning.validate()?;
        Ok(())
    }

    /// Validate only what schema maintenance needs: the database and
    /// logging sections.
    pub fn validate_storage(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ACCOUNTS__DATABASE__URL",
        "ACCOUNTS__PAYMENT__STRIPE_API_KEY",
        "ACCOUNTS__PAYMENT__REQUEST_TIMEOUT_SECS",
        "ACCOUNTS__PROVISIONING__OPERATOR_USERNAME",
        "ACCOUNTS__PROVISIONING__SESSION_LIFETIME_SECS",
        "ACCOUNTS__LOGGING__ENVIRONMENT",
    ];

    /// Helper to set environment variables for testing
    fn set_minimal_env() {
        env::set_var("ACCOUNTS__DATABASE__URL", "postgres://test@localhost/accounts");
        env::set_var("ACCOUNTS__PAYMENT__STRIPE_API_KEY", "sk_test_xxx");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgres://test@localhost/accounts");
        assert_eq!(config.payment.stripe_api_key, "sk_test_xxx");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_provisioning_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.provisioning.operator_username, "admin");
        assert_eq!(config.provisioning.session_lifetime_secs, 3600);
        assert_eq!(config.payment.request_timeout_secs, 10);
        assert_eq!(config.logging.environment, Environment::Development);
    }

    #[test]
    fn test_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ACCOUNTS__PROVISIONING__OPERATOR_USERNAME", "ops");
        env::set_var("ACCOUNTS__PROVISIONING__SESSION_LIFETIME_SECS", "900");
        env::set_var("ACCOUNTS__PAYMENT__REQUEST_TIMEOUT_SECS", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.provisioning.operator_username, "ops");
        assert_eq!(config.provisioning.session_lifetime_secs, 900);
        assert_eq!(config.payment.request_timeout_secs, 3);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ACCOUNTS__LOGGING__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_missing_payment_section_only_blocks_full_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ACCOUNTS__DATABASE__URL", "postgres://test@localhost/accounts");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate_storage().is_ok());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired(
                "ACCOUNTS__PAYMENT__STRIPE_API_KEY"
            ))
        );
    }

    #[test]
    fn test_missing_database_url_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ACCOUNTS__PAYMENT__STRIPE_API_KEY", "sk_test_xxx");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
