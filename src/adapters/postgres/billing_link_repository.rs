//! PostgreSQL implementation of BillingLinkRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::billing::BillingCustomerLink;
use crate::domain::foundation::{AccountId, BillingLinkId, DomainError, ErrorCode, Timestamp};
use crate::ports::BillingLinkRepository;

pub struct PostgresBillingLinkRepository {
    pool: PgPool,
}

impl PostgresBillingLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BillingLinkRow {
    id: Uuid,
    account_id: Uuid,
    customer_id: String,
    created_at: DateTime<Utc>,
}

impl From<BillingLinkRow> for BillingCustomerLink {
    fn from(row: BillingLinkRow) -> Self {
        BillingCustomerLink {
            id: BillingLinkId::from_uuid(row.id),
            account_id: AccountId::from_uuid(row.account_id),
            customer_id: row.customer_id,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl BillingLinkRepository for PostgresBillingLinkRepository {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<BillingCustomerLink>, DomainError> {
        let row: Option<BillingLinkRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, customer_id, created_at
            FROM billing_customer_links
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find billing link: {}", e)))?;

        Ok(row.map(BillingCustomerLink::from))
    }

    async fn get_or_create(
        &self,
        account_id: &AccountId,
        customer_id: &str,
    ) -> Result<(BillingCustomerLink, bool), DomainError> {
        let fresh = BillingCustomerLink::new(*account_id, customer_id)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO billing_customer_links (id, account_id, customer_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (account_id) DO NOTHING
            "#,
        )
        .bind(fresh.id.as_uuid())
        .bind(account_id.as_uuid())
        .bind(&fresh.customer_id)
        .bind(fresh.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save billing link: {}", e)))?
        .rows_affected()
            == 1;

        if inserted {
            return Ok((fresh, true));
        }

        let existing = self.find_by_account(account_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::DatabaseError, "Billing link vanished after conflict")
        })?;
        Ok((existing, false))
    }
}
