//! PostgreSQL implementation of SessionStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AccountId, DomainError, SessionId, Timestamp};
use crate::domain::session::LoginSession;
use crate::ports::SessionStore;

pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    account_id: Uuid,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for LoginSession {
    fn from(row: SessionRow) -> Self {
        LoginSession {
            id: SessionId::from_uuid(row.id),
            account_id: AccountId::from_uuid(row.account_id),
            created_at: Timestamp::from_datetime(row.created_at),
            expires_at: Timestamp::from_datetime(row.expires_at),
        }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn save(&self, session: &LoginSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO login_sessions (id, account_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(session.account_id.as_uuid())
        .bind(session.created_at.as_datetime())
        .bind(session.expires_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save session: {}", e)))?;

        Ok(())
    }

    async fn find(&self, id: &SessionId) -> Result<Option<LoginSession>, DomainError> {
        let row: Option<SessionRow> = sqlx::query_as(
            "SELECT id, account_id, created_at, expires_at FROM login_sessions WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find session: {}", e)))?;

        Ok(row.map(LoginSession::from))
    }
}
