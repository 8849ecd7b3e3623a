//! The personalized digest: a weekly email whose schedule the reader picks.

pub mod fetch;
pub mod subscribe;
pub mod unsubscribe;

use serde::{Deserialize, Serialize};

/// When and in which timezone the digest is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedDigest {
    /// day of the week, `0` is Sunday
    pub preferred_day: i64,
    /// hour of the day, `0` to `23`
    pub preferred_hour: i64,
    /// IANA timezone name
    pub preferred_timezone: String,
}
