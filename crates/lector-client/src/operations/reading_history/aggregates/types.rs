use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::shared::DateRange;

/// Aggregates over a closed date range of one user's reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingHistoryAggregatesInput {
    /// the user whose history is aggregated
    pub id: String,
    /// the days to aggregate over
    pub range: DateRange,
    /// opaque rank model version, forwarded as is
    pub version: Option<i64>,
    /// upper bound on the number of tags returned
    pub limit: Option<i64>,
}

/// Variables of the `UserReadingHistory` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReadingHistoryVariables {
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) range: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) limit: Option<i64>,
}

impl From<ReadingHistoryAggregatesInput> for UserReadingHistoryVariables {
    fn from(input: ReadingHistoryAggregatesInput) -> Self {
        Self {
            id: input.id,
            range: input.range,
            version: input.version,
            limit: input.limit,
        }
    }
}

/// A weekly bucket: how many weeks were spent at `rank`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRankSample {
    /// rank reached in a week
    pub rank: i64,
    /// number of weeks at that rank
    pub count: i64,
}

/// Number of reads on a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadHistoryDay {
    /// the day, in the server's calendar
    #[serde(deserialize_with = "day_of")]
    pub date: NaiveDate,
    /// posts read that day
    pub reads: i64,
}

/// A tag and how often it showed up in the reads.
///
/// `total` and `percentage` are only filled in when the tags were requested
/// for a bounded range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostReadTag {
    /// the tag
    pub value: String,
    /// reads carrying the tag
    pub count: i64,
    pub total: Option<i64>,
    pub percentage: Option<f64>,
}

/// Everything `UserReadingHistory` returns, in one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingHistoryAggregates {
    #[serde(rename = "userReadingRankHistory")]
    pub rank_history: Vec<ReadingRankSample>,
    #[serde(rename = "userReadHistory")]
    pub read_history: Vec<ReadHistoryDay>,
    #[serde(rename = "userMostReadTags")]
    pub most_read_tags: Vec<MostReadTag>,
}

/// The server may send either a bare date or a full timestamp
fn day_of<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(de::Error::custom)
}
