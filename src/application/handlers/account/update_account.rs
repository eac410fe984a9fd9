//! UpdateAccountHandler - owner edits to names and profile.
//!
//! Every successful update is an account save, so the account-saved hook
//! runs afterwards and retries a missing billing link.

use std::sync::Arc;

use crate::application::provisioning::{ProvisioningReport, ProvisioningWorkflow};
use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::AccountId;
use crate::domain::profile::Profile;
use crate::ports::{AccountRepository, ProfileRepository, UserMessages};

/// Command to edit an account and its profile.
///
/// Every field replaces the stored value; `None` or blank clears it.
#[derive(Debug, Clone)]
pub struct UpdateAccountCommand {
    pub account_id: AccountId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub social_profile_url: Option<String>,
}

/// Result of a successful update.
#[derive(Debug, Clone)]
pub struct UpdateAccountResult {
    pub account: Account,
    pub profile: Profile,
    pub report: ProvisioningReport,
}

pub struct UpdateAccountHandler {
    accounts: Arc<dyn AccountRepository>,
    profiles: Arc<dyn ProfileRepository>,
    workflow: Arc<ProvisioningWorkflow>,
}

impl UpdateAccountHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        profiles: Arc<dyn ProfileRepository>,
        workflow: Arc<ProvisioningWorkflow>,
    ) -> Self {
        Self {
            accounts,
            profiles,
            workflow,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAccountCommand,
        messages: &dyn UserMessages,
    ) -> Result<UpdateAccountResult, AccountError> {
        // 1. Load account
        let mut account = self
            .accounts
            .find_by_id(&cmd.account_id)
            .await?
            .ok_or(AccountError::NotFound(cmd.account_id))?;

        // 2. Validate profile edits before writing anything
        let (mut profile, _) = self.profiles.get_or_create(&account.id).await?;
        profile.update(cmd.bio, cmd.social_profile_url)?;

        // 3. Persist
        account.update_names(cmd.first_name, cmd.last_name);
        self.accounts.update(&account).await?;
        self.profiles.update(&profile).await?;

        // 4. Account-saved hook
        let report = self.workflow.on_account_saved(&account, false, messages).await;

        Ok(UpdateAccountResult {
            account,
            profile,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAccountRepository, InMemoryBillingLinkRepository, InMemoryMembershipRepository,
        InMemoryNotificationDispatcher, InMemoryProfileRepository,
    };
    use crate::adapters::messages::CollectedMessages;
    use crate::adapters::operator::UsernameOperatorResolver;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::application::provisioning::{
        BillingOutcome, NotificationOutcome, ProvisioningPorts, ProvisioningSettings,
    };
    use crate::domain::account::{EmailAddress, PasswordHash, Username};

    struct Setup {
        accounts: Arc<InMemoryAccountRepository>,
        profiles: Arc<InMemoryProfileRepository>,
        links: Arc<InMemoryBillingLinkRepository>,
        payments: Arc<MockPaymentProvider>,
        handler: UpdateAccountHandler,
    }

    fn setup() -> Setup {
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let links = Arc::new(InMemoryBillingLinkRepository::new());
        let payments = Arc::new(MockPaymentProvider::new());
        let ports = ProvisioningPorts {
            accounts: accounts.clone(),
            profiles: profiles.clone(),
            memberships: Arc::new(InMemoryMembershipRepository::new()),
            billing_links: links.clone(),
            payments: payments.clone(),
            notifications: Arc::new(InMemoryNotificationDispatcher::new()),
            operator: Arc::new(UsernameOperatorResolver::new(accounts.clone(), "admin")),
        };
        let workflow = Arc::new(ProvisioningWorkflow::new(ports, ProvisioningSettings::default()));
        Setup {
            handler: UpdateAccountHandler::new(accounts.clone(), profiles.clone(), workflow),
            accounts,
            profiles,
            links,
            payments,
        }
    }

    async fn stored_account(s: &Setup) -> Account {
        let account = Account::new(
            Username::new("bob").unwrap(),
            EmailAddress::new("bob@example.com").unwrap(),
            PasswordHash::unusable(),
        );
        s.accounts.insert(&account).await.unwrap();
        account
    }

    fn cmd(account_id: AccountId) -> UpdateAccountCommand {
        UpdateAccountCommand {
            account_id,
            first_name: Some("Bob".to_string()),
            last_name: Some("Builder".to_string()),
            bio: Some("Fixes things".to_string()),
            social_profile_url: Some("https://social.example/bob".to_string()),
        }
    }

    #[tokio::test]
    async fn updates_names_and_profile() {
        let s = setup();
        let account = stored_account(&s).await;

        let result = s
            .handler
            .handle(cmd(account.id), &CollectedMessages::new())
            .await
            .unwrap();

        assert_eq!(result.account.full_name(), "Bob Builder");
        assert_eq!(result.profile.bio.as_deref(), Some("Fixes things"));

        let profile = s.profiles.find_by_account(&account.id).await.unwrap().unwrap();
        assert_eq!(
            profile.social_profile_url.as_deref(),
            Some("https://social.example/bob")
        );
        let stored = s.accounts.find_by_id(&account.id).await.unwrap().unwrap();
        assert_eq!(stored.short_name(), Some("Bob"));
    }

    #[tokio::test]
    async fn update_heals_missing_billing_link() {
        let s = setup();
        let account = stored_account(&s).await;
        assert_eq!(s.links.count().await, 0);

        let result = s
            .handler
            .handle(cmd(account.id), &CollectedMessages::new())
            .await
            .unwrap();

        assert!(matches!(result.report.billing, BillingOutcome::Linked(_)));
        assert_eq!(result.report.notification, NotificationOutcome::Skipped);
        assert_eq!(s.links.count().await, 1);
    }

    #[tokio::test]
    async fn repeated_updates_call_provider_once() {
        let s = setup();
        let account = stored_account(&s).await;
        let messages = CollectedMessages::new();

        s.handler.handle(cmd(account.id), &messages).await.unwrap();
        let second = s.handler.handle(cmd(account.id), &messages).await.unwrap();

        assert_eq!(second.report.billing, BillingOutcome::AlreadyLinked);
        assert_eq!(s.payments.call_count("create_customer"), 1);
    }

    #[tokio::test]
    async fn invalid_social_url_writes_nothing() {
        let s = setup();
        let account = stored_account(&s).await;

        let err = s
            .handler
            .handle(
                UpdateAccountCommand {
                    social_profile_url: Some("javascript:alert(1)".to_string()),
                    ..cmd(account.id)
                },
                &CollectedMessages::new(),
            )
            .await
            .unwrap_err();

        assert!(err.is_validation());
        let stored = s.accounts.find_by_id(&account.id).await.unwrap().unwrap();
        assert!(stored.first_name.is_none());
        assert!(!s.payments.was_called("create_customer"));
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let s = setup();
        let id = AccountId::new();

        let err = s
            .handler
            .handle(cmd(id), &CollectedMessages::new())
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::NotFound(missing) if missing == id));
    }
}
