use serde::{Deserialize, Serialize};

/// Variables of the `SearchReadingHistorySuggestions` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSuggestionsVariables {
    pub(crate) query: String,
}

/// A search suggestion. Only the title is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSuggestion {
    /// title of the matching post
    pub title: String,
}

/// Response of the `SearchReadingHistorySuggestions` query
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestionsResponseData {
    pub(crate) search_reading_history_suggestions: SuggestionHits,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct SuggestionHits {
    pub(crate) hits: Vec<SearchSuggestion>,
}
