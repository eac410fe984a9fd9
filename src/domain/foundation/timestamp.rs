//! UTC instants used for audit columns, membership dates and session expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant. Serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps a value read from the database.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Borrowed form for sqlx binds.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Timestamp) -> bool {
        self > other
    }

    /// `self - earlier`; negative when `earlier` is later.
    pub fn duration_since(&self, earlier: &Timestamp) -> Duration {
        self.0 - earlier.0
    }

    pub fn plus(&self, offset: Duration) -> Self {
        Self(self.0 + offset)
    }

    pub fn plus_secs(&self, secs: i64) -> Self {
        self.plus(Duration::seconds(secs))
    }

    /// Negative `days` move backwards.
    pub fn add_days(&self, days: i64) -> Self {
        self.plus(Duration::days(days))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        Timestamp::from(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn one_hour_session_window() {
        let opened = fixed();
        let expires = opened.plus_secs(3600);

        assert!(expires.is_after(&opened));
        assert!(opened.is_before(&expires));
        assert_eq!(expires.duration_since(&opened), Duration::hours(1));
        assert_eq!(opened.duration_since(&expires), Duration::hours(-1));
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        let earlier = fixed().add_days(-1);
        assert_eq!(earlier.to_string(), "2024-02-29T12:00:00+00:00");
    }

    #[test]
    fn equal_instants_are_neither_before_nor_after() {
        let at = fixed();
        assert!(!at.is_before(&at));
        assert!(!at.is_after(&at));
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert_eq!(json, "\"2024-03-01T12:00:00Z\"");

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixed());
    }
}
