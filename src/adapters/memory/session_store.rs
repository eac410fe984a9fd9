//! In-memory login session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::LoginSession;
use crate::ports::SessionStore;

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, LoginSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &LoginSession) -> Result<(), DomainError> {
        self.sessions.write().await.insert(session.id, session.clone());
        Ok(())
    }

    async fn find(&self, id: &SessionId) -> Result<Option<LoginSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }
}
