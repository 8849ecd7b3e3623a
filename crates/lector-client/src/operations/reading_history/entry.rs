use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{Connection, PostSummary};

/// GraphQL text of `ReadingHistoryFragment`, including the post fragment it spreads
macro_rules! reading_history_fragment {
    () => {
        concat!(
            r#"
fragment ReadingHistoryFragment on ReadingHistory {
  timestamp
  timestampDb
  post {
    ...SharedPostInfo
    sharedPost {
      ...SharedPostInfo
    }
  }
}
"#,
            $crate::shared::post::shared_post_info_fragment!()
        )
    };
}

/// GraphQL text of `ReadingHistoryConnectionFragment` and everything it depends on
macro_rules! reading_history_connection_fragment {
    () => {
        concat!(
            $crate::operations::reading_history::reading_history_fragment!(),
            r#"
fragment ReadingHistoryConnectionFragment on ReadingHistoryConnection {
  pageInfo {
    endCursor
    hasNextPage
  }
  edges {
    node {
      ...ReadingHistoryFragment
    }
  }
}
"#
        )
    };
}

pub(crate) use reading_history_connection_fragment;
pub(crate) use reading_history_fragment;

/// A single read of a post, as the server recorded it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingHistoryEntry {
    /// When the post was read, for display
    pub timestamp: DateTime<Utc>,
    /// The stored timestamp, kept verbatim. This is what identifies the entry.
    pub timestamp_db: String,
    /// The post that was read
    pub post: PostSummary,
}

impl ReadingHistoryEntry {
    /// The `(postId, timestamp)` pair identifying this entry
    pub fn key(&self) -> HistoryEntryKey {
        HistoryEntryKey {
            post_id: self.post.id.clone(),
            timestamp: self.timestamp_db.clone(),
        }
    }
}

/// Identity of a reading history entry, as the hide mutation expects it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntryKey {
    /// id of the post that was read
    pub post_id: String,
    /// the raw database timestamp of the read
    pub timestamp: String,
}

/// Response shape shared by the feed and the search query; the search
/// query aliases its field to `readHistory`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConnectionData {
    pub(crate) read_history: Connection<ReadingHistoryEntry>,
}
