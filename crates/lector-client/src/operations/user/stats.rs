use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::UserIdVariables;
use crate::{LectorClient, LectorClientError};

const USER_STATS_QUERY: &str = r#"
query UserStats($id: ID!) {
  userStats(id: $id) {
    numCommentUpvotes
    numComments
    numPostUpvotes
    numPostViews
    numPosts
  }
}
"#;

/// Post and comment counters of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub num_posts: i64,
    pub num_post_views: i64,
    pub num_post_upvotes: i64,
    pub num_comments: i64,
    pub num_comment_upvotes: i64,
}

/// Response of the `UserStats` query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponseData {
    pub(crate) user_stats: UserStats,
}

/// The `UserStats` query
pub struct UserStatsQuery;

impl GraphQLQuery for UserStatsQuery {
    type Variables = UserIdVariables;
    type ResponseData = UserStatsResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: USER_STATS_QUERY,
            operation_name: "UserStats",
        }
    }
}

/// Fetches a user's post and comment counters
pub async fn run(id: String, client: &LectorClient) -> Result<UserStats, LectorClientError> {
    let response_data = client
        .post::<UserStatsQuery>(UserIdVariables { id })
        .await?;
    Ok(response_data.user_stats)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn counters_decode() {
        let data: UserStatsResponseData = serde_json::from_value(json!({
            "userStats": {
                "numCommentUpvotes": 5,
                "numComments": 4,
                "numPostUpvotes": 3,
                "numPostViews": 2,
                "numPosts": 1
            }
        }))
        .unwrap();

        assert_that!(data.user_stats).is_equal_to(UserStats {
            num_posts: 1,
            num_post_views: 2,
            num_post_upvotes: 3,
            num_comments: 4,
            num_comment_upvotes: 5,
        });
    }
}
