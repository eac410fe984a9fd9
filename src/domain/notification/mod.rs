//! Notification domain module.
//!
//! A notification records that `actor` did something (`verb`) that
//! `recipient` should hear about, e.g. a new signup reported to an operator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, NotificationId, Timestamp};

/// Event tag sent to the operator when an account signs up.
pub const NEW_USER_VERB: &str = "New User Created";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub actor: AccountId,
    pub recipient: AccountId,
    pub verb: String,
    pub unread: bool,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn new(actor: AccountId, recipient: AccountId, verb: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            actor,
            recipient,
            verb: verb.into(),
            unread: true,
            created_at: Timestamp::now(),
        }
    }

    pub fn mark_read(&mut self) {
        self.unread = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_is_unread() {
        let mut n = Notification::new(AccountId::new(), AccountId::new(), NEW_USER_VERB);
        assert!(n.unread);
        assert_eq!(n.verb, "New User Created");
        n.mark_read();
        assert!(!n.unread);
    }
}
