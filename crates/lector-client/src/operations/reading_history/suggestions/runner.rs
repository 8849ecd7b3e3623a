use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{SearchSuggestion, SearchSuggestionsResponseData, SearchSuggestionsVariables};
use crate::{LectorClient, LectorClientError};

const SEARCH_SUGGESTIONS_QUERY: &str = r#"
query SearchReadingHistorySuggestions($query: String!) {
  searchReadingHistorySuggestions(query: $query) {
    hits {
      title
    }
  }
}
"#;

/// The `SearchReadingHistorySuggestions` query
pub struct SearchReadingHistorySuggestionsQuery;

impl GraphQLQuery for SearchReadingHistorySuggestionsQuery {
    type Variables = SearchSuggestionsVariables;
    type ResponseData = SearchSuggestionsResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: SEARCH_SUGGESTIONS_QUERY,
            operation_name: "SearchReadingHistorySuggestions",
        }
    }
}

/// Titles from the reader's history that match `query`
pub async fn run(
    query: String,
    client: &LectorClient,
) -> Result<Vec<SearchSuggestion>, LectorClientError> {
    let response_data = client
        .post::<SearchReadingHistorySuggestionsQuery>(SearchSuggestionsVariables { query })
        .await?;
    Ok(response_data.search_reading_history_suggestions.hits)
}
