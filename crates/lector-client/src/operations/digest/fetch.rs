use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::PersonalizedDigest;
use crate::{LectorClient, LectorClientError};

const PERSONALIZED_DIGEST_QUERY: &str = r#"
query PersonalizedDigest {
  personalizedDigest {
    preferredDay
    preferredHour
    preferredTimezone
  }
}
"#;

/// The `PersonalizedDigest` query takes no variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalizedDigestVariables {}

/// Response of the `PersonalizedDigest` query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedDigestResponseData {
    pub(crate) personalized_digest: Option<PersonalizedDigest>,
}

/// The `PersonalizedDigest` query
pub struct PersonalizedDigestQuery;

impl GraphQLQuery for PersonalizedDigestQuery {
    type Variables = PersonalizedDigestVariables;
    type ResponseData = PersonalizedDigestResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: PERSONALIZED_DIGEST_QUERY,
            operation_name: "PersonalizedDigest",
        }
    }
}

/// The viewer's digest settings, or `None` when they are not subscribed
pub async fn run(client: &LectorClient) -> Result<Option<PersonalizedDigest>, LectorClientError> {
    let response_data = client
        .post::<PersonalizedDigestQuery>(PersonalizedDigestVariables::default())
        .await?;
    Ok(response_data.personalized_digest)
}
