//! PostgreSQL implementation of MembershipRepository.
//!
//! Provides persistent storage for Membership records using PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, MembershipId, Timestamp};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::MembershipRepository;

/// PostgreSQL implementation of the MembershipRepository port.
///
/// Uses sqlx for database operations with connection pooling.
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Creates a new PostgresMembershipRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, account_id: &AccountId) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, start_date, end_date, status, created_at, updated_at
            FROM memberships
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find membership: {}", e)))?;

        row.map(Membership::try_from).transpose()
    }
}

/// Database row representation of a membership.
#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    account_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        let status: MembershipStatus = row
            .status
            .parse()
            .map_err(|e: String| DomainError::database(e))?;

        Ok(Membership::restore(
            MembershipId::from_uuid(row.id),
            AccountId::from_uuid(row.account_id),
            Timestamp::from_datetime(row.start_date),
            row.end_date.map(Timestamp::from_datetime),
            status,
            Timestamp::from_datetime(row.created_at),
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn get_or_create(
        &self,
        account_id: &AccountId,
        now: Timestamp,
    ) -> Result<(Membership, bool), DomainError> {
        let fresh = Membership::start(*account_id, now);

        let inserted = sqlx::query(
            r#"
            INSERT INTO memberships (
                id, account_id, start_date, end_date, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (account_id) DO NOTHING
            "#,
        )
        .bind(fresh.id.as_uuid())
        .bind(account_id.as_uuid())
        .bind(fresh.start_date().as_datetime())
        .bind(fresh.end_date.map(|t| *t.as_datetime()))
        .bind(fresh.status.as_str())
        .bind(fresh.created_at.as_datetime())
        .bind(fresh.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create membership: {}", e)))?
        .rows_affected()
            == 1;

        if inserted {
            return Ok((fresh, true));
        }

        let existing = self.fetch(account_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::MembershipNotFound, "Membership vanished after conflict")
        })?;
        Ok((existing, false))
    }

    async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Membership>, DomainError> {
        self.fetch(account_id).await
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        // start_date is never written after creation.
        let result = sqlx::query(
            r#"
            UPDATE memberships SET
                end_date = $2,
                status = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.end_date.map(|t| *t.as_datetime()))
        .bind(membership.status.as_str())
        .bind(membership.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update membership: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Membership not found",
            ));
        }

        Ok(())
    }
}
