//! Provisioning settings resolved from configuration.

use std::time::Duration;

use crate::config::{PaymentConfig, ProvisioningConfig, MAX_SESSION_LIFETIME_SECS};

/// Values the provisioning workflow needs at run time.
#[derive(Debug, Clone)]
pub struct ProvisioningSettings {
    /// Verb attached to the operator notification.
    pub signup_verb: String,

    /// User-visible text pushed when the payment customer cannot be created.
    pub billing_failure_message: String,

    /// Session expiry is set to now + this on every authentication.
    pub session_lifetime: chrono::Duration,

    /// Upper bound on a single payment-provider call.
    pub payment_timeout: Duration,
}

impl ProvisioningSettings {
    pub fn from_config(provisioning: &ProvisioningConfig, payment: &PaymentConfig) -> Self {
        let lifetime_secs = provisioning
            .session_lifetime_secs
            .min(MAX_SESSION_LIFETIME_SECS);
        Self {
            signup_verb: provisioning.signup_notification_verb.clone(),
            billing_failure_message: provisioning.billing_failure_message.clone(),
            session_lifetime: chrono::Duration::seconds(lifetime_secs as i64),
            payment_timeout: payment.request_timeout(),
        }
    }
}

impl Default for ProvisioningSettings {
    fn default() -> Self {
        Self::from_config(&ProvisioningConfig::default(), &PaymentConfig::default())
    }
}
