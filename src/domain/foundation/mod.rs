//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the accounts domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AccountId, BillingLinkId, MembershipId, NotificationId, ProfileId, SessionId};
pub use timestamp::Timestamp;
