//! Operator resolver port.
//!
//! Identifies the account that receives operational notifications such as
//! new signups.

use async_trait::async_trait;

use crate::domain::account::Account;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait OperatorResolver: Send + Sync {
    /// Returns the operator account, or `None` if none is configured or it
    /// does not exist.
    async fn resolve(&self) -> Result<Option<Account>, DomainError>;
}
