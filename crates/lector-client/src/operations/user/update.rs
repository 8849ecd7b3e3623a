use buildstructor::Builder;
use chrono::{DateTime, Utc};
use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::{LectorClient, LectorClientError};

const UPDATE_USER_PROFILE_MUTATION: &str = r#"
mutation UpdateUserProfile($data: UpdateUserInput) {
  updateUserProfile(data: $data) {
    id
    name
    image
    username
    permalink
    bio
    twitter
    github
    hashnode
    createdAt
    infoConfirmed
    timezone
  }
}
"#;

/// Profile fields to change. Fields left as `None` are not sent and keep
/// their current value.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashnode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl UpdateUserInput {
    /// Whether no field would be changed
    pub fn is_empty(&self) -> bool {
        self == &UpdateUserInput::default()
    }
}

/// Variables of the `UpdateUserProfile` mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserProfileVariables {
    pub(crate) data: UpdateUserInput,
}

/// The profile as the server stored it after the update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfile {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub username: Option<String>,
    pub permalink: String,
    pub bio: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub hashnode: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub info_confirmed: Option<bool>,
    pub timezone: Option<String>,
}

/// Response of the `UpdateUserProfile` mutation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileResponseData {
    pub(crate) update_user_profile: UpdatedProfile,
}

/// The `UpdateUserProfile` mutation. Only `data` is sent; image uploads are
/// not supported.
pub struct UpdateUserProfileMutation;

impl GraphQLQuery for UpdateUserProfileMutation {
    type Variables = UpdateUserProfileVariables;
    type ResponseData = UpdateUserProfileResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: UPDATE_USER_PROFILE_MUTATION,
            operation_name: "UpdateUserProfile",
        }
    }
}

/// Updates the viewer's profile
pub async fn run(
    data: UpdateUserInput,
    client: &LectorClient,
) -> Result<UpdatedProfile, LectorClientError> {
    let response_data = client
        .post::<UpdateUserProfileMutation>(UpdateUserProfileVariables { data })
        .await?;
    Ok(response_data.update_user_profile)
}
