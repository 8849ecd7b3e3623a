use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::{LectorClient, LectorClientError};

const GENERATE_UNIQUE_USERNAME_QUERY: &str = r#"
query GenerateUniqueUsername($name: String!) {
  generateUniqueUsername(name: $name)
}
"#;

/// Variables of the `GenerateUniqueUsername` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateUniqueUsernameVariables {
    pub(crate) name: String,
}

/// Response of the `GenerateUniqueUsername` query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUniqueUsernameResponseData {
    pub(crate) generate_unique_username: String,
}

/// The `GenerateUniqueUsername` query
pub struct GenerateUniqueUsernameQuery;

impl GraphQLQuery for GenerateUniqueUsernameQuery {
    type Variables = GenerateUniqueUsernameVariables;
    type ResponseData = GenerateUniqueUsernameResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GENERATE_UNIQUE_USERNAME_QUERY,
            operation_name: "GenerateUniqueUsername",
        }
    }
}

/// Asks the server for a free username derived from `name`
pub async fn run(name: String, client: &LectorClient) -> Result<String, LectorClientError> {
    let response_data = client
        .post::<GenerateUniqueUsernameQuery>(GenerateUniqueUsernameVariables { name })
        .await?;
    Ok(response_data.generate_unique_username)
}
