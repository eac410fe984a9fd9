//! In-memory profile repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<AccountId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_or_create(&self, account_id: &AccountId) -> Result<(Profile, bool), DomainError> {
        let mut profiles = self.profiles.write().await;
        if let Some(existing) = profiles.get(account_id) {
            return Ok((existing.clone(), false));
        }
        let profile = Profile::empty(*account_id);
        profiles.insert(*account_id, profile.clone());
        Ok((profile, true))
    }

    async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(account_id).cloned())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.get_mut(&profile.account_id) {
            Some(stored) if stored.id == profile.id => {
                *stored = profile.clone();
                Ok(())
            }
            _ => Err(DomainError::new(ErrorCode::ProfileNotFound, "Profile not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let repo = InMemoryProfileRepository::new();
        let account_id = AccountId::new();

        let (first, created) = repo.get_or_create(&account_id).await.unwrap();
        assert!(created);
        let (second, created) = repo.get_or_create(&account_id).await.unwrap();
        assert!(!created);

        assert_eq!(first.id, second.id);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_requires_existing_profile() {
        let repo = InMemoryProfileRepository::new();
        let err = repo.update(&Profile::empty(AccountId::new())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }
}
