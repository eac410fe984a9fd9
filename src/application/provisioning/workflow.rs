//! ProvisioningWorkflow - side effects run after an account is saved or
//! authenticated.
//!
//! Handlers call the two hooks explicitly:
//!
//! - `on_account_saved` after every account insert or update. New accounts
//!   get a profile and an operator notification; every save makes sure a
//!   billing customer is linked.
//! - `on_account_authenticated` after a successful login. Ensures the
//!   membership row exists, sets the member flag if it is missing,
//!   refreshes membership status and extends the session.
//!
//! Each invocation awaits its steps in order and runs to completion. Only
//! persistence failures on the authentication path are returned as errors;
//! save-side effects are reported in a `ProvisioningReport` and never undo
//! the account write.

use std::sync::Arc;

use crate::domain::account::Account;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::Notification;
use crate::domain::session::LoginSession;
use crate::ports::{
    AccountRepository, BillingLinkRepository, CreateCustomerRequest, MembershipRepository,
    NotificationDispatcher, OperatorResolver, PaymentError, PaymentProvider, ProfileRepository,
    UserMessages,
};

use super::{
    AuthenticationReport, BillingOutcome, NotificationOutcome, ProvisioningReport,
    ProvisioningSettings,
};

/// Collaborators of the workflow.
#[derive(Clone)]
pub struct ProvisioningPorts {
    pub accounts: Arc<dyn AccountRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub billing_links: Arc<dyn BillingLinkRepository>,
    pub payments: Arc<dyn PaymentProvider>,
    pub notifications: Arc<dyn NotificationDispatcher>,
    pub operator: Arc<dyn OperatorResolver>,
}

/// Orchestrates account provisioning side effects.
pub struct ProvisioningWorkflow {
    ports: ProvisioningPorts,
    settings: ProvisioningSettings,
}

impl ProvisioningWorkflow {
    pub fn new(ports: ProvisioningPorts, settings: ProvisioningSettings) -> Self {
        Self { ports, settings }
    }

    pub fn settings(&self) -> &ProvisioningSettings {
        &self.settings
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Account saved
    // ════════════════════════════════════════════════════════════════════════════

    /// Runs after every account save. `created` is true only for the insert.
    ///
    /// Never fails: each step's outcome is in the returned report, and
    /// payment failures additionally push one error onto `messages`.
    pub async fn on_account_saved(
        &self,
        account: &Account,
        created: bool,
        messages: &dyn UserMessages,
    ) -> ProvisioningReport {
        let (profile_created, notification) = if created {
            (
                self.ensure_profile(account).await,
                self.notify_operator(account).await,
            )
        } else {
            (false, NotificationOutcome::Skipped)
        };

        let (billing, billing_lookup_error) = self.ensure_billing_link(account, messages).await;

        ProvisioningReport {
            profile_created,
            notification,
            billing,
            billing_lookup_error,
        }
    }

    async fn ensure_profile(&self, account: &Account) -> bool {
        match self.ports.profiles.get_or_create(&account.id).await {
            Ok((_, created)) => created,
            Err(e) => {
                tracing::error!(account_id = %account.id, error = %e, "Failed to create profile");
                false
            }
        }
    }

    async fn notify_operator(&self, account: &Account) -> NotificationOutcome {
        let operator = match self.ports.operator.resolve().await {
            Ok(Some(operator)) => operator,
            Ok(None) => {
                tracing::warn!(
                    account_id = %account.id,
                    "No operator account configured; signup notification not sent"
                );
                return NotificationOutcome::NoOperator;
            }
            Err(e) => {
                tracing::warn!(account_id = %account.id, error = %e, "Operator lookup failed");
                return NotificationOutcome::Failed(e.to_string());
            }
        };

        let notification = Notification::new(account.id, operator.id, &self.settings.signup_verb);
        match self.ports.notifications.send(&notification).await {
            Ok(()) => {
                tracing::debug!(
                    account_id = %account.id,
                    operator = %operator.username,
                    "Operator notified of signup"
                );
                NotificationOutcome::Sent {
                    recipient: operator.id,
                }
            }
            Err(e) => {
                tracing::warn!(
                    account_id = %account.id,
                    operator = %operator.username,
                    error = %e,
                    "Signup notification failed"
                );
                NotificationOutcome::Failed(e.to_string())
            }
        }
    }

    async fn ensure_billing_link(
        &self,
        account: &Account,
        messages: &dyn UserMessages,
    ) -> (BillingOutcome, Option<String>) {
        let lookup_error = match self.ports.billing_links.find_by_account(&account.id).await {
            Ok(Some(_)) => return (BillingOutcome::AlreadyLinked, None),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(
                    account_id = %account.id,
                    error = %e,
                    "Billing link lookup failed; creating customer anyway"
                );
                Some(e.to_string())
            }
        };

        let outcome = self.create_and_link(account, messages).await;
        (outcome, lookup_error)
    }

    /// Creates (or replays) the remote customer and stores the link.
    async fn create_and_link(
        &self,
        account: &Account,
        messages: &dyn UserMessages,
    ) -> BillingOutcome {
        let request = CreateCustomerRequest::for_account(account.id, account.email.as_str());
        let created = tokio::time::timeout(
            self.settings.payment_timeout,
            self.ports.payments.create_customer(request),
        )
        .await
        .unwrap_or_else(|_| Err(PaymentError::timeout(self.settings.payment_timeout.as_secs())));

        let customer = match created {
            Ok(customer) => customer,
            Err(e) => {
                tracing::error!(
                    account_id = %account.id,
                    code = %e.code,
                    retryable = e.retryable,
                    error = %e.message,
                    "Payment customer creation failed"
                );
                messages.error(&self.settings.billing_failure_message);
                return BillingOutcome::Failed(e.to_string());
            }
        };

        match self
            .ports
            .billing_links
            .get_or_create(&account.id, &customer.id)
            .await
        {
            Ok((link, _)) => {
                tracing::info!(
                    account_id = %account.id,
                    customer_id = %link.customer_id,
                    "Payment customer linked"
                );
                BillingOutcome::Linked(link.customer_id)
            }
            Err(e) => {
                // The idempotency key replays this customer on the next save.
                tracing::error!(
                    account_id = %account.id,
                    customer_id = %customer.id,
                    error = %e,
                    "Failed to store billing link"
                );
                messages.error(&self.settings.billing_failure_message);
                BillingOutcome::Failed(e.to_string())
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Account authenticated
    // ════════════════════════════════════════════════════════════════════════════

    /// Runs after a successful login.
    ///
    /// Extends `session` to now + session lifetime, creates the membership
    /// if absent, marks and persists `account` as a member when the flag is
    /// not yet set, and refreshes membership status.
    ///
    /// # Errors
    ///
    /// Returns the first persistence failure.
    pub async fn on_account_authenticated(
        &self,
        session: &mut LoginSession,
        account: &mut Account,
    ) -> Result<AuthenticationReport, DomainError> {
        let now = Timestamp::now();
        session.extend(now, self.settings.session_lifetime);

        let (mut membership, membership_created) = self
            .ports
            .memberships
            .get_or_create(&account.id, now)
            .await?;

        if membership_created {
            tracing::info!(
                account_id = %account.id,
                start_date = %membership.start_date(),
                "Membership started"
            );
        }

        // A membership without the flag means an earlier flag write failed.
        if account.mark_member() {
            if !membership_created {
                tracing::warn!(account_id = %account.id, "Restoring missing member flag");
            }
            if let Err(e) = self.ports.accounts.update(account).await {
                account.is_member = false;
                return Err(e);
            }
        }

        if membership.refresh_status(now) {
            tracing::debug!(
                account_id = %account.id,
                status = %membership.status,
                "Membership status changed"
            );
            self.ports.memberships.update(&membership).await?;
        }

        Ok(AuthenticationReport {
            membership_created,
            membership_status: membership.status,
            session_expires_at: session.expires_at,
        })
    }
}
