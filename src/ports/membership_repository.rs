//! Membership repository port (write side).
//!
//! # Design
//!
//! - **Unique constraint**: only one membership per account
//! - **Create-if-absent**: `get_or_create` is the only way memberships come
//!   into existence, so concurrent logins cannot produce duplicates

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError, Timestamp};
use crate::domain::membership::Membership;

/// Repository port for Membership persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Return the account's membership, starting one at `now` if absent.
    ///
    /// The boolean is `true` when this call created the row. An existing
    /// membership is returned untouched (its start date is preserved).
    async fn get_or_create(
        &self,
        account_id: &AccountId,
        now: Timestamp,
    ) -> Result<(Membership, bool), DomainError>;

    /// Find a membership by account ID.
    async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Membership>, DomainError>;

    /// Update an existing membership.
    ///
    /// # Errors
    ///
    /// - `MembershipNotFound` if membership doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, membership: &Membership) -> Result<(), DomainError>;
}
