use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::shared::EmptyResponse;
use crate::{LectorClient, LectorClientError};

const UNSUBSCRIBE_PERSONALIZED_DIGEST_MUTATION: &str = r#"
mutation UnsubscribePersonalizedDigest {
  unsubscribePersonalizedDigest {
    _
  }
}
"#;

/// The `UnsubscribePersonalizedDigest` mutation takes no variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnsubscribeDigestVariables {}

/// Response of the `UnsubscribePersonalizedDigest` mutation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsubscribeDigestResponseData {
    pub(crate) unsubscribe_personalized_digest: Option<EmptyResponse>,
}

/// The `UnsubscribePersonalizedDigest` mutation
pub struct UnsubscribePersonalizedDigestMutation;

impl GraphQLQuery for UnsubscribePersonalizedDigestMutation {
    type Variables = UnsubscribeDigestVariables;
    type ResponseData = UnsubscribeDigestResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: UNSUBSCRIBE_PERSONALIZED_DIGEST_MUTATION,
            operation_name: "UnsubscribePersonalizedDigest",
        }
    }
}

/// Stops the digest. Unsubscribing twice is not an error.
pub async fn run(client: &LectorClient) -> Result<(), LectorClientError> {
    client
        .post::<UnsubscribePersonalizedDigestMutation>(UnsubscribeDigestVariables::default())
        .await?;
    Ok(())
}
