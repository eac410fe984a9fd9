//! Account aggregate entity.
//!
//! The Account is the addressable root of the accounts domain. Profile,
//! Membership and BillingCustomerLink records all hang off an account id.
//!
//! # Invariants
//!
//! - `username` and `email` are non-empty and globally unique (uniqueness is
//!   enforced by the repository)
//! - `is_staff()` always equals `is_admin`
//! - Accounts are never hard-deleted; `deactivate` is the terminal state

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, Timestamp};

use super::{EmailAddress, PasswordHash, Username};

/// Maximum length of first/last names.
pub const MAX_NAME_LENGTH: usize = 120;

/// Authenticated identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// Paid-member flag, set by the login workflow.
    pub is_member: bool,

    pub is_active: bool,
    pub is_admin: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    /// Creates a new active, non-admin, non-member account.
    pub fn new(username: Username, email: EmailAddress, password_hash: PasswordHash) -> Self {
        let now = Timestamp::now();
        Self {
            id: AccountId::new(),
            username,
            email,
            password_hash,
            first_name: None,
            last_name: None,
            is_member: false,
            is_active: true,
            is_admin: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Staff status is derived from the admin flag.
    pub fn is_staff(&self) -> bool {
        self.is_admin
    }

    /// "first last", with missing parts rendered empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    pub fn short_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Active accounts hold every permission.
    pub fn has_perm(&self, _perm: &str) -> bool {
        self.is_active
    }

    /// Active accounts may view every module.
    pub fn has_module_perms(&self, _app_label: &str) -> bool {
        self.is_active
    }

    /// Marks the account as a paid member. Returns `true` if the flag changed.
    pub fn mark_member(&mut self) -> bool {
        if self.is_member {
            return false;
        }
        self.is_member = true;
        self.touch();
        true
    }

    pub fn promote_to_admin(&mut self) {
        self.is_admin = true;
        self.touch();
    }

    pub fn record_login(&mut self, at: Timestamp) {
        self.last_login = Some(at);
        self.touch();
    }

    /// Replaces first and last names. Blank values clear the field.
    pub fn update_names(&mut self, first: Option<String>, last: Option<String>) {
        self.first_name = normalize_name(first);
        self.last_name = normalize_name(last);
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().chars().take(MAX_NAME_LENGTH).collect::<String>())
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            Username::new("bob").unwrap(),
            EmailAddress::new("bob@example.com").unwrap(),
            PasswordHash::from_hash("hash"),
        )
    }

    #[test]
    fn new_account_has_defaults() {
        let account = account();
        assert!(account.is_active);
        assert!(!account.is_admin);
        assert!(!account.is_member);
        assert!(account.last_login.is_none());
    }

    #[test]
    fn staff_follows_admin_flag() {
        let mut account = account();
        assert!(!account.is_staff());
        account.promote_to_admin();
        assert!(account.is_staff());
    }

    #[test]
    fn mark_member_reports_change_once() {
        let mut account = account();
        assert!(account.mark_member());
        assert!(!account.mark_member());
        assert!(account.is_member);
    }

    #[test]
    fn full_name_handles_missing_parts() {
        let mut account = account();
        assert_eq!(account.full_name(), "");

        account.update_names(Some("Ada".to_string()), None);
        assert_eq!(account.full_name(), "Ada");
        assert_eq!(account.short_name(), Some("Ada"));

        account.update_names(Some("Ada".to_string()), Some("Lovelace".to_string()));
        assert_eq!(account.full_name(), "Ada Lovelace");
    }

    #[test]
    fn blank_names_are_cleared() {
        let mut account = account();
        account.update_names(Some("  ".to_string()), Some(String::new()));
        assert!(account.first_name.is_none());
        assert!(account.last_name.is_none());
    }

    #[test]
    fn deactivated_account_loses_permissions() {
        let mut account = account();
        assert!(account.has_perm("anything"));
        account.deactivate();
        assert!(!account.has_perm("anything"));
        assert!(!account.has_module_perms("billing"));
    }
}
