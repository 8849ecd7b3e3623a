use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::reading_rank::ReadingRank;
use crate::shared::UserShortInfo;
use crate::{LectorClient, LectorClientError};

const USER_TOOLTIP_CONTENT_QUERY: &str = r#"
query UserTooltipContent($id: ID!, $version: Int, $requestUserInfo: Boolean!) {
  rank: userReadingRank(id: $id, version: $version) {
    currentRank
  }
  tags: userMostReadTags(id: $id) {
    value
  }
  user(id: $id) @include(if: $requestUserInfo) {
    id
    name
    username
    image
    bio
    permalink
  }
}
"#;

/// Variables of the `UserTooltipContent` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTooltipVariables {
    pub(crate) id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<i64>,
    pub(crate) request_user_info: bool,
}

/// Content of a user's hover card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTooltip {
    pub rank: ReadingRank,
    pub tags: Vec<TooltipTag>,
    /// Only present when the user block was asked for
    #[serde(default)]
    pub user: Option<UserShortInfo>,
}

/// A most-read tag, by value only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipTag {
    pub value: String,
}

/// The `UserTooltipContent` query
pub struct UserTooltipContentQuery;

impl GraphQLQuery for UserTooltipContentQuery {
    type Variables = UserTooltipVariables;
    type ResponseData = UserTooltip;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: USER_TOOLTIP_CONTENT_QUERY,
            operation_name: "UserTooltipContent",
        }
    }
}

/// Fetches rank and top tags of a user, and their short profile when
/// `request_user_info` is set
pub async fn run(
    id: String,
    version: Option<i64>,
    request_user_info: bool,
    client: &LectorClient,
) -> Result<UserTooltip, LectorClientError> {
    client
        .post::<UserTooltipContentQuery>(UserTooltipVariables {
            id,
            version,
            request_user_info,
        })
        .await
}
