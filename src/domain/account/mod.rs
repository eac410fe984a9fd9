//! Account domain module.
//!
//! - `aggregate` - Account entity (identity, flags, names)
//! - `values` - Username, EmailAddress and PasswordHash value objects
//! - `errors` - AccountError surfaced by account handlers

mod aggregate;
mod errors;
mod values;

pub use aggregate::{Account, MAX_NAME_LENGTH};
pub use errors::AccountError;
pub use values::{EmailAddress, PasswordHash, Username, MAX_IDENTITY_LENGTH};
