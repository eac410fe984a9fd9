//! Account repository port.
//!
//! # Design
//!
//! - **Uniqueness**: implementations enforce unique usernames and unique
//!   emails (compared case-insensitively)
//! - **No deletes**: accounts are deactivated, never removed

use async_trait::async_trait;

use crate::domain::account::{Account, EmailAddress, Username};
use crate::domain::foundation::{AccountId, DomainError};

/// Repository port for Account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` with detail `username` on a duplicate username
    /// - `EmailTaken` with detail `email` on a duplicate email
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, account: &Account) -> Result<(), DomainError>;

    /// Update an existing account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, account: &Account) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, DomainError>;

    /// Case-insensitive lookup by email.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError>;
}
