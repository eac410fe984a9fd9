//! Notification dispatcher port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::notification::Notification;

/// Delivers notifications to their recipient.
///
/// Delivery is best-effort. Callers log and drop errors rather than failing
/// the operation that produced the notification.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError>;
}
