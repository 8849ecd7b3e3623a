use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{SearchReadingHistoryInput, SearchReadingHistoryVariables};
use crate::operations::reading_history::{
    reading_history_connection_fragment, HistoryConnectionData, ReadingHistoryEntry,
};
use crate::shared::Page;
use crate::{LectorClient, LectorClientError};

const SEARCH_READING_HISTORY_QUERY: &str = concat!(
    r#"
query SearchReadingHistory($first: Int, $after: String, $query: String!) {
  readHistory: searchReadingHistory(first: $first, after: $after, query: $query) {
    ...ReadingHistoryConnectionFragment
  }
}
"#,
    reading_history_connection_fragment!()
);

/// The `SearchReadingHistory` query. Its field is aliased to `readHistory`,
/// so it decodes exactly like the feed.
pub struct SearchReadingHistoryQuery;

impl GraphQLQuery for SearchReadingHistoryQuery {
    type Variables = SearchReadingHistoryVariables;
    type ResponseData = HistoryConnectionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: SEARCH_READING_HISTORY_QUERY,
            operation_name: "SearchReadingHistory",
        }
    }
}

/// Searches the reader's history and returns one page of matches
pub async fn run(
    input: SearchReadingHistoryInput,
    client: &LectorClient,
) -> Result<Page<ReadingHistoryEntry>, LectorClientError> {
    let response_data = client
        .post::<SearchReadingHistoryQuery>(input.into())
        .await?;
    Ok(Page::from(response_data.read_history))
}
