//! PostgreSQL implementation of AccountRepository.
//!
//! Username uniqueness is a table constraint; email uniqueness is a unique
//! index on `LOWER(email)`, so lookups and conflicts are case-insensitive.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{Account, EmailAddress, PasswordHash, Username};
use crate::domain::foundation::{AccountId, DomainError, ErrorCode, Timestamp, ValidationError};
use crate::ports::AccountRepository;

/// PostgreSQL implementation of the AccountRepository port.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    is_member: bool,
    is_active: bool,
    is_admin: bool,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |e: ValidationError| {
            DomainError::database(format!("Invalid stored account {}: {}", id, e))
        };
        Ok(Account {
            id: AccountId::from_uuid(row.id),
            username: Username::new(&row.username).map_err(corrupt)?,
            email: EmailAddress::new(&row.email).map_err(corrupt)?,
            password_hash: PasswordHash::from_hash(row.password_hash),
            first_name: row.first_name,
            last_name: row.last_name,
            is_member: row.is_member,
            is_active: row.is_active,
            is_admin: row.is_admin,
            last_login: row.last_login.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, password_hash, first_name, last_name,
           is_member, is_active, is_admin, last_login, created_at, updated_at
    FROM accounts
"#;

fn map_write_error(e: sqlx::Error, account: &Account, action: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.constraint() {
            Some("accounts_username_key") => {
                return DomainError::new(ErrorCode::UsernameTaken, "Username already taken")
                    .with_detail("username", account.username.as_str());
            }
            Some("accounts_email_lower_key") => {
                return DomainError::new(ErrorCode::EmailTaken, "Email already registered")
                    .with_detail("email", account.email.as_str());
            }
            _ => {}
        }
    }
    DomainError::database(format!("Failed to {} account: {}", action, e))
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, account: &Account) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                id, username, email, password_hash, first_name, last_name,
                is_member, is_active, is_admin, last_login, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.is_member)
        .bind(account.is_active)
        .bind(account.is_admin)
        .bind(account.last_login.map(|t| *t.as_datetime()))
        .bind(account.created_at.as_datetime())
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, account, "save"))?;

        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts SET
                username = $2,
                email = $3,
                password_hash = $4,
                first_name = $5,
                last_name = $6,
                is_member = $7,
                is_active = $8,
                is_admin = $9,
                last_login = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.is_member)
        .bind(account.is_active)
        .bind(account.is_admin)
        .bind(account.last_login.map(|t| *t.as_datetime()))
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, account, "update"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::AccountNotFound, "Account not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find account: {}", e)))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> =
            sqlx::query_as(&format!("{} WHERE username = $1", SELECT_COLUMNS))
                .bind(username.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find account: {}", e)))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> =
            sqlx::query_as(&format!("{} WHERE LOWER(email) = $1", SELECT_COLUMNS))
                .bind(email.lookup_key())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find account: {}", e)))?;

        row.map(Account::try_from).transpose()
    }
}
