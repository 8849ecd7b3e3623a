use serde::Serialize;

use crate::shared::Cursor;

/// A page of full-text search over the reader's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReadingHistoryInput {
    /// The search text, passed through untouched
    pub query: String,
    /// Requested page size
    pub first: Option<i64>,
    /// Start after this cursor; `None` fetches the first page
    pub after: Option<Cursor>,
}

/// Variables of the `SearchReadingHistory` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReadingHistoryVariables {
    pub(crate) query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) after: Option<Cursor>,
}

impl From<SearchReadingHistoryInput> for SearchReadingHistoryVariables {
    fn from(input: SearchReadingHistoryInput) -> Self {
        Self {
            query: input.query,
            first: input.first,
            after: input.after,
        }
    }
}
