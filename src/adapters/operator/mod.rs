//! Operator resolution by configured username.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::account::{Account, Username};
use crate::domain::foundation::DomainError;
use crate::ports::{AccountRepository, OperatorResolver};

/// Resolves the operator as the account with a configured username.
pub struct UsernameOperatorResolver {
    accounts: Arc<dyn AccountRepository>,
    username: Option<Username>,
}

impl UsernameOperatorResolver {
    /// A blank username disables operator notifications.
    pub fn new(accounts: Arc<dyn AccountRepository>, username: &str) -> Self {
        Self {
            accounts,
            username: Username::new(username).ok(),
        }
    }
}

#[async_trait]
impl OperatorResolver for UsernameOperatorResolver {
    async fn resolve(&self) -> Result<Option<Account>, DomainError> {
        match &self.username {
            Some(username) => self.accounts.find_by_username(username).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAccountRepository;
    use crate::domain::account::{EmailAddress, PasswordHash};

    #[tokio::test]
    async fn resolves_configured_username() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let admin = Account::new(
            Username::new("admin").unwrap(),
            EmailAddress::new("admin@example.com").unwrap(),
            PasswordHash::unusable(),
        );
        repo.insert(&admin).await.unwrap();

        let resolver = UsernameOperatorResolver::new(repo.clone(), "admin");
        assert_eq!(resolver.resolve().await.unwrap().map(|a| a.id), Some(admin.id));

        let missing = UsernameOperatorResolver::new(repo, "root");
        assert!(missing.resolve().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn blank_username_resolves_nothing() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let resolver = UsernameOperatorResolver::new(repo, "  ");
        assert!(resolver.resolve().await.unwrap().is_none());
    }
}
