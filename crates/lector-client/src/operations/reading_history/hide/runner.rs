use graphql_client::{GraphQLQuery, QueryBody};

use super::types::{HideReadHistoryResponseData, HideReadHistoryVariables};
use crate::operations::reading_history::HistoryEntryKey;
use crate::{LectorClient, LectorClientError};

const HIDE_READ_HISTORY_MUTATION: &str = r#"
mutation HideReadHistory($postId: String!, $timestamp: DateTime!) {
  hideReadHistory(postId: $postId, timestamp: $timestamp) {
    _
  }
}
"#;

/// The `HideReadHistory` mutation
pub struct HideReadHistoryMutation;

impl GraphQLQuery for HideReadHistoryMutation {
    type Variables = HideReadHistoryVariables;
    type ResponseData = HideReadHistoryResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: HIDE_READ_HISTORY_MUTATION,
            operation_name: "HideReadHistory",
        }
    }
}

/// Hides one entry from the reader's history.
///
/// Hiding an entry that is already hidden succeeds as well; the server
/// acknowledges and nothing changes.
pub async fn run(key: HistoryEntryKey, client: &LectorClient) -> Result<(), LectorClientError> {
    tracing::debug!(post_id = %key.post_id, timestamp = %key.timestamp, "hiding history entry");
    client.post::<HideReadHistoryMutation>(key.into()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn the_raw_timestamp_is_echoed_verbatim() {
        let key = HistoryEntryKey {
            post_id: "p1".to_string(),
            timestamp: "2024-03-02 10:00:00.123456+00".to_string(),
        };

        let body = HideReadHistoryMutation::build_query(key.into());

        assert_eq!(
            serde_json::to_value(&body.variables).unwrap(),
            json!({ "postId": "p1", "timestamp": "2024-03-02 10:00:00.123456+00" })
        );
    }

    #[test]
    fn an_acknowledgment_may_be_empty() {
        let data: HideReadHistoryResponseData =
            serde_json::from_value(json!({ "hideReadHistory": { "_": null } })).unwrap();
        assert_eq!(data.hide_read_history, Some(Default::default()));

        let data: HideReadHistoryResponseData =
            serde_json::from_value(json!({ "hideReadHistory": null })).unwrap();
        assert_eq!(data.hide_read_history, None);
    }
}
