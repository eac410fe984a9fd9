//! Membership domain module.
//!
//! Tracks when an account's paid membership started and whether it is
//! currently in good standing.
//!
//! # Module Structure
//!
//! - `aggregate` - Membership entity
//! - `status` - MembershipStatus

mod aggregate;
mod status;

pub use aggregate::Membership;
pub use status::MembershipStatus;
