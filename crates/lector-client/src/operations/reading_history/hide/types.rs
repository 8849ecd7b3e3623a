use serde::{Deserialize, Serialize};

use crate::operations::reading_history::HistoryEntryKey;
use crate::shared::EmptyResponse;

/// Variables of the `HideReadHistory` mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HideReadHistoryVariables {
    pub(crate) post_id: String,
    pub(crate) timestamp: String,
}

impl From<HistoryEntryKey> for HideReadHistoryVariables {
    fn from(key: HistoryEntryKey) -> Self {
        Self {
            post_id: key.post_id,
            timestamp: key.timestamp,
        }
    }
}

/// Response of the `HideReadHistory` mutation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideReadHistoryResponseData {
    pub(crate) hide_read_history: Option<EmptyResponse>,
}
