use graphql_client::{GraphQLQuery, QueryBody};
use serde::Deserialize;

use super::UserIdVariables;
use crate::shared::{user::user_short_info_fragment, UserShortInfo};
use crate::{LectorClient, LectorClientError};

const REFERRING_USER_QUERY: &str = concat!(
    r#"
query User($id: ID!) {
  user(id: $id) {
    ...UserShortInfo
  }
}
"#,
    user_short_info_fragment!()
);

/// Response of the referring-user lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferringUserResponseData {
    pub(crate) user: UserShortInfo,
}

/// The `User` query selecting the `UserShortInfo` fragment
pub struct ReferringUserQuery;

impl GraphQLQuery for ReferringUserQuery {
    type Variables = UserIdVariables;
    type ResponseData = ReferringUserResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: REFERRING_USER_QUERY,
            operation_name: "User",
        }
    }
}

/// Fetches the short profile of the user behind a referral
pub async fn run(id: String, client: &LectorClient) -> Result<UserShortInfo, LectorClientError> {
    let response_data = client
        .post::<ReferringUserQuery>(UserIdVariables { id })
        .await?;
    Ok(response_data.user)
}
