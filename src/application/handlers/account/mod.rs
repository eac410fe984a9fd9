//! Account handlers.
//!
//! - `create_account` - `create_user` / `create_superuser`
//! - `update_account` - Owner edits to names and profile
//! - `login` - Credential check and session start

mod create_account;
mod login;
mod update_account;

pub use create_account::{CreateAccountCommand, CreateAccountHandler, CreateAccountResult};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use update_account::{UpdateAccountCommand, UpdateAccountHandler, UpdateAccountResult};
