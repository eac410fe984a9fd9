//! In-memory account repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, EmailAddress, Username};
use crate::domain::foundation::{AccountId, DomainError, ErrorCode};
use crate::ports::AccountRepository;

/// In-memory storage for accounts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    failing_updates: Arc<AtomicUsize>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` updates fail with a database error.
    pub fn fail_next_updates(&self, n: usize) {
        self.failing_updates.store(n, Ordering::SeqCst);
    }

    /// Number of stored accounts (useful for tests)
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

fn conflict(existing: &Account, candidate: &Account) -> Option<DomainError> {
    if existing.id == candidate.id {
        return None;
    }
    if existing.username == candidate.username {
        return Some(
            DomainError::new(ErrorCode::UsernameTaken, "Username already taken")
                .with_detail("username", candidate.username.as_str()),
        );
    }
    if existing.email.lookup_key() == candidate.email.lookup_key() {
        return Some(
            DomainError::new(ErrorCode::EmailTaken, "Email already registered")
                .with_detail("email", candidate.email.as_str()),
        );
    }
    None
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        if let Some(err) = accounts.values().find_map(|existing| conflict(existing, account)) {
            return Err(err);
        }
        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let remaining = self.failing_updates.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_updates.store(remaining - 1, Ordering::SeqCst);
            return Err(DomainError::database("Simulated update failure"));
        }
        let mut accounts = self.accounts.write().await;
        if !accounts.contains_key(&account.id) {
            return Err(DomainError::new(ErrorCode::AccountNotFound, "Account not found"));
        }
        if let Some(err) = accounts.values().find_map(|existing| conflict(existing, account)) {
            return Err(err);
        }
        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| &a.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        let key = email.lookup_key();
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.email.lookup_key() == key)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::PasswordHash;

    fn account(username: &str, email: &str) -> Account {
        Account::new(
            Username::new(username).unwrap(),
            EmailAddress::new(email).unwrap(),
            PasswordHash::from_hash("hash"),
        )
    }

    #[tokio::test]
    async fn insert_and_find_by_username() {
        let repo = InMemoryAccountRepository::new();
        let bob = account("bob", "bob@example.com");
        repo.insert(&bob).await.unwrap();

        let found = repo
            .find_by_username(&Username::new("bob").unwrap())
            .await
            .unwrap();
        assert_eq!(found.map(|a| a.id), Some(bob.id));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(&account("bob", "bob@example.com")).await.unwrap();

        let err = repo
            .insert(&account("bob", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UsernameTaken);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(&account("bob", "bob@example.com")).await.unwrap();

        let err = repo
            .insert(&account("robert", "BOB@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailTaken);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_unknown_account_fails() {
        let repo = InMemoryAccountRepository::new();
        let err = repo
            .update(&account("ghost", "ghost@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AccountNotFound);
    }

    #[tokio::test]
    async fn injected_update_failures_are_consumed() {
        let repo = InMemoryAccountRepository::new();
        let bob = account("bob", "bob@example.com");
        repo.insert(&bob).await.unwrap();
        repo.fail_next_updates(1);

        let err = repo.update(&bob).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(repo.update(&bob).await.is_ok());
    }
}
