//! Membership status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paid-membership status, derived from the paid-through date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// Paid period has not ended (or is open-ended).
    Active,

    /// Paid period ended.
    Expired,
}

impl MembershipStatus {
    pub fn has_access(&self) -> bool {
        matches!(self, MembershipStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MembershipStatus::Active),
            "expired" => Ok(MembershipStatus::Expired),
            other => Err(format!("Invalid membership status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_has_access() {
        assert!(MembershipStatus::Active.has_access());
        assert!(!MembershipStatus::Expired.has_access());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ACTIVE".parse::<MembershipStatus>(), Ok(MembershipStatus::Active));
        assert_eq!("expired".parse::<MembershipStatus>(), Ok(MembershipStatus::Expired));
        assert!("pending".parse::<MembershipStatus>().is_err());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&MembershipStatus::Expired).unwrap();
        assert_eq!(json, "\"expired\"");
    }
}
