//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `account` - Account identity, flags and value objects
//! - `profile` - Per-account descriptive record
//! - `membership` - Paid-membership start date and status
//! - `billing` - Link between an account and the payment processor customer
//! - `session` - Authenticated login sessions
//! - `notification` - Operator-facing notifications

pub mod account;
pub mod billing;
pub mod foundation;
pub mod membership;
pub mod notification;
pub mod profile;
pub mod session;
