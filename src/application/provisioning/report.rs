//! Outcomes reported by the provisioning hooks.
//!
//! Side-effect failures never abort the triggering operation; instead each
//! step reports what happened so callers and tests can observe it.

use serde::Serialize;

use crate::domain::foundation::{AccountId, Timestamp};
use crate::domain::membership::MembershipStatus;

/// What happened to the operator notification on signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum NotificationOutcome {
    /// The account was not newly created, so nobody was notified.
    Skipped,

    /// The operator was notified.
    Sent { recipient: AccountId },

    /// No operator account could be resolved.
    NoOperator,

    /// Resolving the operator or dispatching failed.
    Failed(String),
}

/// What happened to the billing-customer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum BillingOutcome {
    /// A link already existed; the payment provider was not called.
    AlreadyLinked,

    /// A remote customer was created (or replayed) and linked.
    Linked(String),

    /// Customer creation or link storage failed; retried on the next save.
    Failed(String),
}

impl BillingOutcome {
    pub fn is_linked(&self) -> bool {
        matches!(self, BillingOutcome::AlreadyLinked | BillingOutcome::Linked(_))
    }
}

/// Result of `ProvisioningWorkflow::on_account_saved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisioningReport {
    /// A profile row was inserted by this run.
    pub profile_created: bool,
    pub notification: NotificationOutcome,
    pub billing: BillingOutcome,

    /// Set when the link lookup failed and creation went ahead as if no
    /// link existed. The per-account idempotency key keeps that safe.
    pub billing_lookup_error: Option<String>,
}

/// Result of `ProvisioningWorkflow::on_account_authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationReport {
    /// A membership row was inserted by this run.
    pub membership_created: bool,
    pub membership_status: MembershipStatus,
    pub session_expires_at: Timestamp,
}
