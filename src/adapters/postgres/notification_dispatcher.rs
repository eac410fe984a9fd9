//! Notification dispatcher that persists notifications as unread rows.
//!
//! Recipients read them from the `notifications` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::notification::Notification;
use crate::ports::NotificationDispatcher;

pub struct PostgresNotificationDispatcher {
    pool: PgPool,
}

impl PostgresNotificationDispatcher {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationDispatcher for PostgresNotificationDispatcher {
    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, actor_id, recipient_id, verb, unread, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification.id.as_uuid())
        .bind(notification.actor.as_uuid())
        .bind(notification.recipient.as_uuid())
        .bind(&notification.verb)
        .bind(notification.unread)
        .bind(notification.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to store notification: {}", e)))?;

        tracing::debug!(
            notification_id = %notification.id,
            recipient = %notification.recipient,
            verb = %notification.verb,
            "Notification stored"
        );

        Ok(())
    }
}
