use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::PersonalizedDigest;
use crate::{LectorClient, LectorClientError};

const SUBSCRIBE_PERSONALIZED_DIGEST_MUTATION: &str = r#"
mutation SubscribePersonalizedDigest($hour: Int, $day: Int, $timezone: String) {
  subscribePersonalizedDigest(hour: $hour, day: $day, timezone: $timezone) {
    preferredDay
    preferredHour
    preferredTimezone
  }
}
"#;

/// Schedule to subscribe with. Anything left `None` is chosen by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscribeDigestInput {
    /// hour of the day, `0` to `23`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    /// day of the week, `0` is Sunday
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    /// IANA timezone name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Response of the `SubscribePersonalizedDigest` mutation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeDigestResponseData {
    pub(crate) subscribe_personalized_digest: PersonalizedDigest,
}

/// The `SubscribePersonalizedDigest` mutation
pub struct SubscribePersonalizedDigestMutation;

impl GraphQLQuery for SubscribePersonalizedDigestMutation {
    type Variables = SubscribeDigestInput;
    type ResponseData = SubscribeDigestResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: SUBSCRIBE_PERSONALIZED_DIGEST_MUTATION,
            operation_name: "SubscribePersonalizedDigest",
        }
    }
}

/// Subscribes the viewer, or moves an existing subscription to a new schedule
pub async fn run(
    input: SubscribeDigestInput,
    client: &LectorClient,
) -> Result<PersonalizedDigest, LectorClientError> {
    let response_data = client
        .post::<SubscribePersonalizedDigestMutation>(input)
        .await?;
    Ok(response_data.subscribe_personalized_digest)
}
