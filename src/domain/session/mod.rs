//! Login session domain module.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, SessionId, Timestamp};

/// An authenticated session for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSession {
    pub id: SessionId,
    pub account_id: AccountId,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl LoginSession {
    /// Opens a session that expires `lifetime` after `now`.
    pub fn open(account_id: AccountId, now: Timestamp, lifetime: Duration) -> Self {
        Self {
            id: SessionId::new(),
            account_id,
            created_at: now,
            expires_at: now.plus(lifetime),
        }
    }

    /// Moves expiry to `now + lifetime`, regardless of the previous value.
    pub fn extend(&mut self, now: Timestamp, lifetime: Duration) {
        self.expires_at = now.plus(lifetime);
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        !self.expires_at.is_after(&now)
    }
}
