//! Membership aggregate entity.
//!
//! Each account has at most one Membership, created on first login.
//!
//! # Invariants
//!
//! - `account_id` is unique (one membership per account)
//! - `start_date` is set once at creation and never reassigned
//! - `status` is only changed through `refresh_status`

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, MembershipId, Timestamp};

use super::MembershipStatus;

/// Per-account paid-membership record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub account_id: AccountId,

    /// When the membership began. Immutable after creation.
    start_date: Timestamp,

    /// End of the paid period, if one has been recorded.
    pub end_date: Option<Timestamp>,

    pub status: MembershipStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Membership {
    /// Starts a new open-ended membership at `start`.
    pub fn start(account_id: AccountId, start: Timestamp) -> Self {
        Self {
            id: MembershipId::new(),
            account_id,
            start_date: start,
            end_date: None,
            status: MembershipStatus::Active,
            created_at: start,
            updated_at: start,
        }
    }

    /// Rebuilds a membership from stored fields.
    pub fn restore(
        id: MembershipId,
        account_id: AccountId,
        start_date: Timestamp,
        end_date: Option<Timestamp>,
        status: MembershipStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            account_id,
            start_date,
            end_date,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    /// Records a paid period ending at `end`.
    pub fn extend_until(&mut self, end: Timestamp) {
        self.end_date = Some(end);
        self.updated_at = Timestamp::now();
    }

    /// Recomputes `status` from the paid-through date.
    ///
    /// Returns `true` if the status changed.
    pub fn refresh_status(&mut self, now: Timestamp) -> bool {
        let next = match self.end_date {
            Some(end) if end.is_before(&now) => MembershipStatus::Expired,
            _ => MembershipStatus::Active,
        };
        if next == self.status {
            return false;
        }
        self.status = next;
        self.updated_at = now;
        true
    }

    pub fn has_access(&self) -> bool {
        self.status.has_access()
    }
}
