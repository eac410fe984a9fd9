//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, ProfileId, Timestamp};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, account_id: &AccountId) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, bio, social_profile_url, created_at, updated_at
            FROM profiles
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find profile: {}", e)))?;

        Ok(row.map(Profile::from))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    account_id: Uuid,
    bio: Option<String>,
    social_profile_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: ProfileId::from_uuid(row.id),
            account_id: AccountId::from_uuid(row.account_id),
            bio: row.bio,
            social_profile_url: row.social_profile_url,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn get_or_create(&self, account_id: &AccountId) -> Result<(Profile, bool), DomainError> {
        let fresh = Profile::empty(*account_id);

        let inserted = sqlx::query(
            r#"
            INSERT INTO profiles (id, account_id, bio, social_profile_url, created_at, updated_at)
            VALUES ($1, $2, NULL, NULL, $3, $4)
            ON CONFLICT (account_id) DO NOTHING
            "#,
        )
        .bind(fresh.id.as_uuid())
        .bind(account_id.as_uuid())
        .bind(fresh.created_at.as_datetime())
        .bind(fresh.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create profile: {}", e)))?
        .rows_affected()
            == 1;

        if inserted {
            return Ok((fresh, true));
        }

        let existing = self.fetch(account_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, "Profile vanished after conflict")
        })?;
        Ok((existing, false))
    }

    async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Profile>, DomainError> {
        self.fetch(account_id).await
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET bio = $2, social_profile_url = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(&profile.bio)
        .bind(&profile.social_profile_url)
        .bind(profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"));
        }

        Ok(())
    }
}
