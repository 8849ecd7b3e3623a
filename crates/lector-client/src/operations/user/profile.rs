use chrono::{DateTime, Utc};
use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::UserIdVariables;
use crate::{LectorClient, LectorClientError};

const USER_QUERY: &str = r#"
query User($id: ID!) {
  user(id: $id) {
    id
    name
    image
    username
    bio
    twitter
    github
    hashnode
    timezone
    portfolio
    reputation
    permalink
    createdAt
  }
}
"#;

/// The static part of a user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub hashnode: Option<String>,
    pub timezone: Option<String>,
    pub portfolio: Option<String>,
    pub reputation: Option<i64>,
    pub permalink: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of the `User` query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponseData {
    pub(crate) user: UserProfile,
}

/// The `User` query, selecting the static profile fields
pub struct UserQuery;

impl GraphQLQuery for UserQuery {
    type Variables = UserIdVariables;
    type ResponseData = UserResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: USER_QUERY,
            operation_name: "User",
        }
    }
}

/// Fetches a user's profile by id
pub async fn run(id: String, client: &LectorClient) -> Result<UserProfile, LectorClientError> {
    let response_data = client.post::<UserQuery>(UserIdVariables { id }).await?;
    Ok(response_data.user)
}
