//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repositories, sessions and notifications
//! - `postgres` - PostgreSQL repositories, sessions and notifications
//! - `stripe` - Stripe payment provider (plus a mock for tests)
//! - `password` - Argon2id password hashing
//! - `operator` - Operator lookup by configured username
//! - `messages` - User-visible message sinks

pub mod memory;
pub mod messages;
pub mod operator;
pub mod password;
pub mod postgres;
pub mod stripe;
