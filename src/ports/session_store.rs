//! Login session storage port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::LoginSession;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert or replace the session.
    async fn save(&self, session: &LoginSession) -> Result<(), DomainError>;

    async fn find(&self, id: &SessionId) -> Result<Option<LoginSession>, DomainError>;
}
