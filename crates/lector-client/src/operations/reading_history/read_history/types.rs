use serde::Serialize;

use crate::shared::Cursor;

/// Which page of the reader's own history to fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadHistoryInput {
    /// Start after this cursor; `None` fetches the first page
    pub after: Option<Cursor>,
    /// Requested page size; the server picks one when absent
    pub first: Option<i64>,
    /// Restrict the history to posts from public sources
    pub is_public: Option<bool>,
}

/// Variables of the `ReadHistory` query. Absent values are left out of the
/// request entirely, so the first page is requested without any `after`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadHistoryVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) after: Option<Cursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_public: Option<bool>,
}

impl From<ReadHistoryInput> for ReadHistoryVariables {
    fn from(input: ReadHistoryInput) -> Self {
        Self {
            after: input.after,
            first: input.first,
            is_public: input.is_public,
        }
    }
}
