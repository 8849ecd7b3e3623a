use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{
    ReadingHistoryAggregates, ReadingHistoryAggregatesInput, UserReadingHistoryVariables,
};
use crate::{LectorClient, LectorClientError};

const USER_READING_HISTORY_QUERY: &str = r#"
query UserReadingHistory(
  $id: ID!
  $after: String!
  $before: String!
  $version: Int
  $limit: Int
) {
  userReadingRankHistory(
    id: $id
    version: $version
    after: $after
    before: $before
  ) {
    rank
    count
  }
  userReadHistory(id: $id, after: $after, before: $before) {
    date
    reads
  }
  userMostReadTags(id: $id, after: $after, before: $before, limit: $limit) {
    value
    count
    total
    percentage
  }
}
"#;

/// The `UserReadingHistory` query: rank history, daily reads and top tags
pub struct UserReadingHistoryQuery;

impl GraphQLQuery for UserReadingHistoryQuery {
    type Variables = UserReadingHistoryVariables;
    type ResponseData = ReadingHistoryAggregates;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: USER_READING_HISTORY_QUERY,
            operation_name: "UserReadingHistory",
        }
    }
}

/// Fetches all three aggregates for `input.range` in a single round trip
pub async fn run(
    input: ReadingHistoryAggregatesInput,
    client: &LectorClient,
) -> Result<ReadingHistoryAggregates, LectorClientError> {
    client.post::<UserReadingHistoryQuery>(input.into()).await
}
