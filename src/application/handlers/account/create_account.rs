//! CreateAccountHandler - `create_user` and `create_superuser`.

use std::sync::Arc;

use crate::application::provisioning::{ProvisioningReport, ProvisioningWorkflow};
use crate::domain::account::{Account, AccountError, EmailAddress, PasswordHash, Username};
use crate::ports::{AccountRepository, PasswordHasher, UserMessages};

/// Command to create an account.
#[derive(Clone)]
pub struct CreateAccountCommand {
    pub username: String,
    pub email: String,

    /// `None` stores an unusable password; the account cannot log in until
    /// one is set.
    pub password: Option<String>,
}

impl std::fmt::Debug for CreateAccountCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountCommand")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Result of successful account creation.
#[derive(Debug, Clone)]
pub struct CreateAccountResult {
    pub account: Account,
    pub report: ProvisioningReport,
}

/// Handler for creating regular and admin accounts.
pub struct CreateAccountHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    workflow: Arc<ProvisioningWorkflow>,
}

impl CreateAccountHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        workflow: Arc<ProvisioningWorkflow>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            workflow,
        }
    }

    /// Validates input, hashes the password, inserts the account and runs
    /// the account-created hook.
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty username or a missing/malformed email
    /// - `UsernameTaken` / `EmailTaken` on conflicts
    pub async fn create_user(
        &self,
        cmd: CreateAccountCommand,
        messages: &dyn UserMessages,
    ) -> Result<CreateAccountResult, AccountError> {
        let account = self.build_account(cmd)?;
        self.accounts.insert(&account).await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Account created"
        );

        let report = self.workflow.on_account_saved(&account, true, messages).await;
        Ok(CreateAccountResult { account, report })
    }

    /// Creates the account as `create_user` does, then grants admin and
    /// saves again. The second save re-runs the billing step.
    pub async fn create_superuser(
        &self,
        cmd: CreateAccountCommand,
        messages: &dyn UserMessages,
    ) -> Result<CreateAccountResult, AccountError> {
        let CreateAccountResult {
            mut account,
            mut report,
        } = self.create_user(cmd, messages).await?;

        account.promote_to_admin();
        self.accounts.update(&account).await?;

        tracing::info!(account_id = %account.id, "Account promoted to admin");

        let resave = self.workflow.on_account_saved(&account, false, messages).await;
        report.billing = resave.billing;
        report.billing_lookup_error = resave.billing_lookup_error;

        Ok(CreateAccountResult { account, report })
    }

    fn build_account(&self, cmd: CreateAccountCommand) -> Result<Account, AccountError> {
        let username = Username::new(&cmd.username)?;
        let email = EmailAddress::new(&cmd.email)?;
        let password_hash = match cmd.password.as_deref() {
            Some(plain) => self.hasher.hash(plain)?,
            None => PasswordHash::unusable(),
        };
        Ok(Account::new(username, email, password_hash))
    }
}
