//! LoginHandler - credential check followed by the authentication hook.

use std::sync::Arc;

use crate::application::provisioning::{
    AuthenticationReport, ProvisioningReport, ProvisioningWorkflow,
};
use crate::domain::account::{Account, AccountError, Username};
use crate::domain::foundation::Timestamp;
use crate::domain::session::LoginSession;
use crate::ports::{AccountRepository, PasswordHasher, SessionStore, UserMessages};

/// Command to log in with username and password.
#[derive(Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub account: Account,
    pub session: LoginSession,
    pub authentication: AuthenticationReport,

    /// Outcome of the save that records `last_login`.
    pub provisioning: ProvisioningReport,
}

pub struct LoginHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    workflow: Arc<ProvisioningWorkflow>,
}

impl LoginHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        workflow: Arc<ProvisioningWorkflow>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            sessions,
            workflow,
        }
    }

    /// # Errors
    ///
    /// - `InvalidCredentials` for an unknown username or wrong password
    /// - `Inactive` when the credentials match a deactivated account
    pub async fn handle(
        &self,
        cmd: LoginCommand,
        messages: &dyn UserMessages,
    ) -> Result<LoginResult, AccountError> {
        // 1. Verify credentials
        let username = Username::new(&cmd.username).map_err(|_| AccountError::InvalidCredentials)?;
        let mut account = self
            .accounts
            .find_by_username(&username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, &account.password_hash) {
            tracing::info!(account_id = %account.id, "Login rejected: bad password");
            return Err(AccountError::InvalidCredentials);
        }
        if !account.is_active {
            tracing::info!(account_id = %account.id, "Login rejected: inactive account");
            return Err(AccountError::Inactive);
        }

        // 2. Record the login; this is an account save
        let now = Timestamp::now();
        account.record_login(now);
        self.accounts.update(&account).await?;
        let provisioning = self.workflow.on_account_saved(&account, false, messages).await;

        // 3. Open the session and run the authentication hook
        let mut session =
            LoginSession::open(account.id, now, self.workflow.settings().session_lifetime);
        let authentication = self
            .workflow
            .on_account_authenticated(&mut session, &mut account)
            .await?;
        self.sessions.save(&session).await?;

        tracing::info!(
            account_id = %account.id,
            session_id = %session.id,
            expires_at = %session.expires_at,
            "Login succeeded"
        );

        Ok(LoginResult {
            account,
            session,
            authentication,
            provisioning,
        })
    }
}
