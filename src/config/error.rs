//! Configuration errors.

use thiserror::Error;

/// Failure to build an [`AppConfig`](super::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment could not be read or deserialized.
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A configuration value that loaded but is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Names the environment variable to set.
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("database URL scheme '{0}' is not postgres")]
    UnsupportedDatabaseScheme(String),

    #[error("database pool needs 1 <= min ({min}) <= max ({max}) <= {limit}")]
    PoolBounds { min: u32, max: u32, limit: u32 },

    #[error("database acquire timeout must be at least one second")]
    ZeroAcquireTimeout,

    #[error("Stripe key must be a secret key (sk_...)")]
    InvalidStripeKey,

    #[error("payment API base URL '{0}' is not http(s)")]
    InvalidPaymentBaseUrl(String),

    #[error("payment request timeout of {0}s is outside 1..=120")]
    InvalidPaymentTimeout(u64),

    #[error("session lifetime of {0}s is outside one second to 30 days")]
    InvalidSessionLifetime(u64),

    #[error("invalid log filter: {0}")]
    InvalidLogLevel(String),
}
