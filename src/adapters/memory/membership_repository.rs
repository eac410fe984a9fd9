//! In-memory membership repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, Timestamp};
use crate::domain::membership::Membership;
use crate::ports::MembershipRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipRepository {
    memberships: Arc<RwLock<HashMap<AccountId, Membership>>>,
}

impl InMemoryMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.memberships.read().await.len()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn get_or_create(
        &self,
        account_id: &AccountId,
        now: Timestamp,
    ) -> Result<(Membership, bool), DomainError> {
        let mut memberships = self.memberships.write().await;
        if let Some(existing) = memberships.get(account_id) {
            return Ok((existing.clone(), false));
        }
        let membership = Membership::start(*account_id, now);
        memberships.insert(*account_id, membership.clone());
        Ok((membership, true))
    }

    async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Membership>, DomainError> {
        Ok(self.memberships.read().await.get(account_id).cloned())
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut memberships = self.memberships.write().await;
        match memberships.get_mut(&membership.account_id) {
            Some(stored) if stored.id == membership.id => {
                *stored = membership.clone();
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Membership not found",
            )),
        }
    }
}
