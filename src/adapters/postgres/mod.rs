//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAccountRepository` - Accounts with unique username and email
//! - `PostgresProfileRepository` - Create-if-absent profiles
//! - `PostgresMembershipRepository` - Create-if-absent memberships
//! - `PostgresBillingLinkRepository` - Payment-customer links
//! - `PostgresSessionStore` - Login sessions
//! - `PostgresNotificationDispatcher` - Notifications stored as unread rows
//!
//! `run_migrations` applies the schema under `migrations/`.

mod account_repository;
mod billing_link_repository;
mod membership_repository;
mod notification_dispatcher;
mod profile_repository;
mod session_store;

pub use account_repository::PostgresAccountRepository;
pub use billing_link_repository::PostgresBillingLinkRepository;
pub use membership_repository::PostgresMembershipRepository;
pub use notification_dispatcher::PostgresNotificationDispatcher;
pub use profile_repository::PostgresProfileRepository;
pub use session_store::PostgresSessionStore;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Open a connection pool sized by the database section.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await
}
