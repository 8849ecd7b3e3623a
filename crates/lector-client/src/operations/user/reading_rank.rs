use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::RankVariables;
use crate::{LectorClient, LectorClientError};

const USER_READING_RANK_QUERY: &str = r#"
query UserReadingRank($id: ID!, $version: Int) {
  userReadingRank(id: $id, version: $version) {
    currentRank
  }
}
"#;

/// A user's current reading rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRank {
    pub current_rank: i64,
}

/// Response of the `UserReadingRank` query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReadingRankResponseData {
    pub(crate) user_reading_rank: ReadingRank,
}

/// The `UserReadingRank` query, current rank only
pub struct UserReadingRankQuery;

impl GraphQLQuery for UserReadingRankQuery {
    type Variables = RankVariables;
    type ResponseData = UserReadingRankResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: USER_READING_RANK_QUERY,
            operation_name: "UserReadingRank",
        }
    }
}

/// Fetches the current reading rank of any user
pub async fn run(
    id: String,
    version: Option<i64>,
    client: &LectorClient,
) -> Result<ReadingRank, LectorClientError> {
    let response_data = client
        .post::<UserReadingRankQuery>(RankVariables { id, version })
        .await?;
    Ok(response_data.user_reading_rank)
}
