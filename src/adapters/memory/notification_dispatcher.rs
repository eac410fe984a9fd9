//! In-memory notification dispatcher.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode};
use crate::domain::notification::Notification;
use crate::ports::NotificationDispatcher;

/// Records sent notifications; can be switched to fail every send.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationDispatcher {
    sent: Arc<RwLock<Vec<Notification>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryNotificationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher whose every send fails.
    pub fn failing() -> Self {
        let dispatcher = Self::new();
        dispatcher.failing.store(true, Ordering::SeqCst);
        dispatcher
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.read().await.clone()
    }

    pub async fn unread_for(&self, recipient: &AccountId) -> Vec<Notification> {
        self.sent
            .read()
            .await
            .iter()
            .filter(|n| &n.recipient == recipient && n.unread)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotificationDispatcher for InMemoryNotificationDispatcher {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Simulated notification failure",
            ));
        }
        self.sent.write().await.push(notification.clone());
        Ok(())
    }
}
