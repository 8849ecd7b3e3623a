use std::{future::Future, pin::Pin};

use graphql_client::{GraphQLQuery, QueryBody};
use lector_graphql::{GraphQLRequest, GraphQLServiceError};
use tower::Service;

use super::types::{ReadHistoryInput, ReadHistoryVariables};
use crate::operations::reading_history::{
    reading_history_connection_fragment, HistoryConnectionData, ReadingHistoryEntry,
};
use crate::shared::Page;
use crate::LectorClientError;

const OPERATION_NAME: &str = "ReadHistory";

const READ_HISTORY_QUERY: &str = concat!(
    r#"
query ReadHistory($after: String, $first: Int, $isPublic: Boolean) {
  readHistory(after: $after, first: $first, isPublic: $isPublic) {
    ...ReadingHistoryConnectionFragment
  }
}
"#,
    reading_history_connection_fragment!()
);

/// The `ReadHistory` query: one page of the reader's history
pub struct ReadHistoryQuery;

impl GraphQLQuery for ReadHistoryQuery {
    type Variables = ReadHistoryVariables;
    type ResponseData = HistoryConnectionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: READ_HISTORY_QUERY,
            operation_name: OPERATION_NAME,
        }
    }
}

/// Service fetching pages of reading history on top of a GraphQL service
#[derive(Clone)]
pub struct ReadHistory<S: Clone> {
    inner: S,
}

impl<S: Clone> ReadHistory<S> {
    /// Wraps a GraphQL service
    pub const fn new(inner: S) -> ReadHistory<S> {
        ReadHistory { inner }
    }
}

impl<S, Fut> Service<ReadHistoryInput> for ReadHistory<S>
where
    S: Service<
            GraphQLRequest<ReadHistoryQuery>,
            Response = HistoryConnectionData,
            Error = GraphQLServiceError<HistoryConnectionData>,
            Future = Fut,
        > + Clone
        + Send
        + 'static,
    Fut: Future<Output = Result<S::Response, S::Error>> + Send,
{
    type Response = Page<ReadingHistoryEntry>;
    type Error = LectorClientError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest<ReadHistoryQuery>>::poll_ready(&mut self.inner, cx)
            .map_err(|err| LectorClientError::request_failed(OPERATION_NAME, err))
    }

    fn call(&mut self, input: ReadHistoryInput) -> Self::Future {
        let cloned = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, cloned);
        let fut = async move {
            let variables = ReadHistoryVariables::from(input);
            let response_data = inner
                .call(GraphQLRequest::new(variables))
                .await
                .map_err(|err| LectorClientError::request_failed(OPERATION_NAME, err))?;
            Ok(Page::from(response_data.read_history))
        };
        Box::pin(fut)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;
    use tower::{ServiceBuilder, ServiceExt};
    use tower_test::mock;

    use super::*;
    use crate::FailureReason;

    fn entry(post_id: &str, timestamp: &str) -> serde_json::Value {
        json!({
            "node": {
                "timestamp": timestamp,
                "timestampDb": timestamp,
                "post": {
                    "id": post_id,
                    "title": "A post",
                    "permalink": format!("https://example.com/r/{post_id}"),
                    "commentsPermalink": format!("https://example.com/posts/{post_id}"),
                    "tags": ["rust"],
                    "source": { "id": "community", "name": "Community", "handle": "community" }
                }
            }
        })
    }

    #[test]
    fn the_document_carries_every_fragment_once() {
        let QueryBody {
            query,
            operation_name,
            ..
        } = ReadHistoryQuery::build_query(ReadHistoryVariables::default());

        assert_that!(operation_name).is_equal_to("ReadHistory");
        for fragment in [
            "fragment SharedPostInfo on Post",
            "fragment ReadingHistoryFragment on ReadingHistory",
            "fragment ReadingHistoryConnectionFragment on ReadingHistoryConnection",
        ] {
            assert_that!(query.matches(fragment).count()).is_equal_to(1);
        }
    }

    #[tokio::test]
    async fn it_flattens_the_connection_into_a_page() {
        let (mock, mut handle) =
            mock::pair::<GraphQLRequest<ReadHistoryQuery>, HistoryConnectionData>();
        let service = ServiceBuilder::new()
            .layer_fn(ReadHistory::new)
            .map_err(GraphQLServiceError::<HistoryConnectionData>::UpstreamService)
            .service(mock);

        let input = ReadHistoryInput {
            after: Some("Y3Vyc29y".parse().unwrap()),
            first: Some(2),
            is_public: None,
        };
        let response = tokio::spawn(service.oneshot(input));

        let (request, send_response) = handle.next_request().await.unwrap();
        let variables = request.into_inner();
        assert_that!(variables.after.as_ref().map(|cursor| cursor.as_str()))
            .is_equal_to(Some("Y3Vyc29y"));
        assert_that!(variables.first).is_equal_to(Some(2));

        send_response.send_response(
            serde_json::from_value(json!({
                "readHistory": {
                    "pageInfo": { "endCursor": "bmV4dA==", "hasNextPage": true },
                    "edges": [
                        entry("p1", "2024-03-02T10:00:00.000Z"),
                        entry("p2", "2024-03-01T09:30:00.000Z")
                    ]
                }
            }))
            .unwrap(),
        );

        let page = response.await.unwrap().unwrap();
        assert_that!(page.len()).is_equal_to(2);
        assert_that!(page.entries[0].post.id.as_str()).is_equal_to("p1");
        assert_that!(page.entries[1].key().timestamp.as_str())
            .is_equal_to("2024-03-01T09:30:00.000Z");
        assert_that!(page.page_info.next_cursor().map(|cursor| cursor.as_str()))
            .is_equal_to(Some("bmV4dA=="));
    }

    #[tokio::test]
    async fn upstream_failures_name_the_operation() {
        let (mock, mut handle) =
            mock::pair::<GraphQLRequest<ReadHistoryQuery>, HistoryConnectionData>();
        let service = ServiceBuilder::new()
            .layer_fn(ReadHistory::new)
            .map_err(GraphQLServiceError::<HistoryConnectionData>::UpstreamService)
            .service(mock);

        let response = tokio::spawn(service.oneshot(ReadHistoryInput::default()));

        let (_, send_response) = handle.next_request().await.unwrap();
        send_response.send_error(std::io::Error::other("connection reset"));

        let error = response.await.unwrap().unwrap_err();
        assert_that!(matches!(
            error,
            LectorClientError::RequestFailed {
                operation: "ReadHistory",
                reason: FailureReason::Transport,
                ..
            }
        ))
        .is_true();
    }
}
