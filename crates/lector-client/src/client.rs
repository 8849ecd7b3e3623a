use std::{collections::HashMap, fmt, time::Duration};

use buildstructor::buildstructor;
use graphql_client::{GraphQLQuery, QueryBody};
use http::HeaderMap;
use lector_graphql::{GraphQLRequest, GraphQLService};
use lector_http::{
    extend_headers::ExtendHeadersLayer, retry::RetryPolicy, timeout::TimeoutLayer, HttpService,
};
use tower::{retry::RetryLayer, Service, ServiceBuilder, ServiceExt};
use url::Url;

use crate::{headers, LectorClientError};

/// the version of lector-client currently set in `Cargo.toml`
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Represents a client for making GraphQL requests to the platform API.
///
/// The client is cheap to clone; every request builds a fresh service stack
/// on top of the shared [`HttpService`].
#[derive(Clone)]
pub struct LectorClient {
    endpoint: Url,
    headers: HeaderMap,
    http_service: HttpService,
    retries: Option<usize>,
    total_timeout: Option<Duration>,
}

impl fmt::Debug for LectorClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LectorClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("headers", &self.headers)
            .field("retries", &self.retries)
            .field("total_timeout", &self.total_timeout)
            .finish()
    }
}

#[buildstructor]
impl LectorClient {
    /// Construct a new [LectorClient].
    ///
    /// `retries` and `total_timeout` configure the transport stack; the
    /// operations themselves never retry.
    #[builder]
    pub fn new(
        endpoint: Url,
        http_service: HttpService,
        access_token: Option<String>,
        client_version: Option<String>,
        extra_headers: Option<HashMap<String, String>>,
        retries: Option<usize>,
        total_timeout: Option<Duration>,
    ) -> Result<LectorClient, LectorClientError> {
        let client_version = client_version.unwrap_or_else(|| CLIENT_VERSION.to_string());
        let mut headers = headers::build_lector_headers(access_token.as_deref(), &client_version)?;
        if let Some(extra_headers) = extra_headers {
            for (name, value) in headers::build(&extra_headers)?.iter() {
                headers.insert(name.clone(), value.clone());
            }
        }
        tracing::trace!(request_headers = ?headers);
        Ok(LectorClient {
            endpoint,
            headers,
            http_service,
            retries,
            total_timeout,
        })
    }

    /// The GraphQL endpoint this client talks to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the GraphQL service stack for a single request:
    /// overall timeout, then retries, then the client headers.
    pub fn graphql_service(&self) -> Result<GraphQLService<HttpService>, LectorClientError> {
        let retry_layer = match self.retries {
            Some(retries) if retries > 0 => Some(RetryLayer::new(RetryPolicy::new(retries)?)),
            _ => None,
        };
        let timeout_layer = self.total_timeout.map(TimeoutLayer::new);
        let http_service_stack = ServiceBuilder::new()
            .boxed_clone()
            .option_layer(timeout_layer)
            .option_layer(retry_layer)
            .layer(ExtendHeadersLayer::new(self.headers.clone()))
            .service(self.http_service.clone());
        Ok(GraphQLService::new(
            Some(self.endpoint.clone()),
            http_service_stack,
        ))
    }

    /// Client method for making a GraphQL request.
    ///
    /// Every failure, from the transport up to GraphQL errors in the
    /// response, comes back as [`LectorClientError::RequestFailed`].
    pub async fn post<Q>(&self, variables: Q::Variables) -> Result<Q::ResponseData, LectorClientError>
    where
        Q: GraphQLQuery + Send + Sync + 'static,
        Q::Variables: Send,
        Q::ResponseData: Send + Sync + fmt::Debug + 'static,
    {
        let QueryBody {
            variables,
            operation_name,
            ..
        } = Q::build_query(variables);
        let mut service = self.graphql_service()?;
        let service = ServiceExt::<GraphQLRequest<Q>>::ready(&mut service)
            .await
            .map_err(|err| LectorClientError::request_failed(operation_name, err))?;
        service
            .call(GraphQLRequest::<Q>::new(variables))
            .await
            .map_err(|err| LectorClientError::request_failed(operation_name, err))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use graphql_client::QueryBody;
    use lector_http::{test::MockHttpService, HttpRequest, HttpServiceError};
    use lector_tower::test::MockCloneService;
    use serde::{Deserialize, Serialize};
    use speculoos::prelude::*;
    use tower::ServiceExt;

    use super::*;
    use crate::FailureReason;

    struct PingQuery;

    #[derive(Serialize, Debug)]
    struct PingVariables {}

    #[derive(Deserialize, Debug, PartialEq)]
    struct PingResponse {
        ping: bool,
    }

    impl GraphQLQuery for PingQuery {
        type Variables = PingVariables;
        type ResponseData = PingResponse;

        fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
            QueryBody {
                variables,
                query: "query Ping { ping }",
                operation_name: "Ping",
            }
        }
    }

    fn client_with(mock: MockHttpService) -> LectorClient {
        LectorClient::builder()
            .endpoint(Url::parse("http://localhost/graphql").unwrap())
            .http_service(MockCloneService::new(mock).boxed_clone())
            .access_token("token")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn it_sends_client_headers_and_decodes_data() {
        let mut mock = MockHttpService::new();
        mock.expect_poll_ready()
            .returning(|_| std::task::Poll::Ready(Ok(())));
        mock.expect_call()
            .times(1)
            .withf(|req| {
                req.headers().get(http::header::AUTHORIZATION).unwrap() == "Bearer token"
                    && req.headers().get("x-client-name").unwrap() == "lector"
            })
            .returning(|_| {
                futures::future::ready(Ok(http::Response::new(Bytes::from_static(
                    br#"{"data":{"ping":true}}"#,
                ))))
            });

        let response = client_with(mock).post::<PingQuery>(PingVariables {}).await;

        assert_that!(response)
            .is_ok()
            .is_equal_to(PingResponse { ping: true });
    }

    #[tokio::test]
    async fn transport_errors_become_request_failed() {
        let mut mock = MockHttpService::new();
        mock.expect_poll_ready()
            .returning(|_| std::task::Poll::Ready(Ok(())));
        mock.expect_call()
            .times(1)
            .returning(|_| futures::future::ready(Err(HttpServiceError::TimedOut)));

        let response = client_with(mock).post::<PingQuery>(PingVariables {}).await;

        assert_that!(response).is_err().matches(|err| {
            matches!(
                err,
                LectorClientError::RequestFailed {
                    operation: "Ping",
                    reason: FailureReason::Transport,
                    ..
                }
            )
        });
    }

    #[tokio::test]
    async fn the_total_timeout_bounds_a_slow_response() {
        let slow = tower::service_fn(|_request: HttpRequest| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, HttpServiceError>(http::Response::new(Bytes::from_static(
                br#"{"data":{"ping":true}}"#,
            )))
        });
        let client = LectorClient::builder()
            .endpoint(Url::parse("http://localhost/graphql").unwrap())
            .http_service(slow.boxed_clone())
            .total_timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let response = client.post::<PingQuery>(PingVariables {}).await;

        assert_that!(response)
            .is_err()
            .matches(|err| err.reason() == Some(FailureReason::Transport));
    }

    #[tokio::test]
    async fn graphql_errors_become_request_failed() {
        let mut mock = MockHttpService::new();
        mock.expect_poll_ready()
            .returning(|_| std::task::Poll::Ready(Ok(())));
        mock.expect_call().times(1).returning(|_| {
            futures::future::ready(Ok(http::Response::new(Bytes::from_static(
                br#"{"data":null,"errors":[{"message":"boom"}]}"#,
            ))))
        });

        let response = client_with(mock).post::<PingQuery>(PingVariables {}).await;

        assert_that!(response)
            .is_err()
            .matches(|err| err.reason() == Some(FailureReason::GraphQL));
    }
}
