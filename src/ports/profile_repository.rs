//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError};
use crate::domain::profile::Profile;

/// Repository for account profiles (one per account).
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Return the account's profile, creating an empty one if absent.
    ///
    /// The boolean is `true` when this call created the row. Calling this
    /// repeatedly never yields a second profile.
    async fn get_or_create(&self, account_id: &AccountId) -> Result<(Profile, bool), DomainError>;

    async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Profile>, DomainError>;

    /// Update an existing profile
    async fn update(&self, profile: &Profile) -> Result<(), DomainError>;
}
