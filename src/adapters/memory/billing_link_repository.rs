//! In-memory billing-customer link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::billing::BillingCustomerLink;
use crate::domain::foundation::{AccountId, DomainError};
use crate::ports::BillingLinkRepository;

/// In-memory link storage with lookup-failure injection for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBillingLinkRepository {
    links: Arc<RwLock<HashMap<AccountId, BillingCustomerLink>>>,
    failing_lookups: Arc<AtomicUsize>,
}

impl InMemoryBillingLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` lookups fail with a database error.
    pub fn fail_next_lookups(&self, n: usize) {
        self.failing_lookups.store(n, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.links.read().await.len()
    }
}

#[async_trait]
impl BillingLinkRepository for InMemoryBillingLinkRepository {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<BillingCustomerLink>, DomainError> {
        let remaining = self.failing_lookups.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_lookups.store(remaining - 1, Ordering::SeqCst);
            return Err(DomainError::database("Simulated lookup failure"));
        }
        Ok(self.links.read().await.get(account_id).cloned())
    }

    async fn get_or_create(
        &self,
        account_id: &AccountId,
        customer_id: &str,
    ) -> Result<(BillingCustomerLink, bool), DomainError> {
        let mut links = self.links.write().await;
        if let Some(existing) = links.get(account_id) {
            return Ok((existing.clone(), false));
        }
        let link = BillingCustomerLink::new(*account_id, customer_id)?;
        links.insert(*account_id, link.clone());
        Ok((link, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn second_create_keeps_first_customer() {
        let repo = InMemoryBillingLinkRepository::new();
        let account_id = AccountId::new();

        let (_, created) = repo.get_or_create(&account_id, "cust_1").await.unwrap();
        assert!(created);
        let (link, created) = repo.get_or_create(&account_id, "cust_2").await.unwrap();
        assert!(!created);
        assert_eq!(link.customer_id, "cust_1");
    }

    #[tokio::test]
    async fn injected_failures_are_consumed() {
        let repo = InMemoryBillingLinkRepository::new();
        let account_id = AccountId::new();
        repo.fail_next_lookups(1);

        let err = repo.find_by_account(&account_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(repo.find_by_account(&account_id).await.unwrap().is_none());
    }
}
