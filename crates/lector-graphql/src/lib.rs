#![warn(missing_docs)]

//! Provides GraphQL Middleware for HTTP Services

use std::{fmt, future::Future, pin::Pin, str::FromStr};

use bytes::Bytes;
use graphql_client::GraphQLQuery;
use http::{uri::InvalidUri, HeaderValue, Method, StatusCode, Uri};
use http_body_util::Full;
use lector_http::{HttpRequest, HttpResponse};
use serde::Deserialize;
use tower::{Layer, Service};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";
const UNAUTHENTICATED_CODE: &str = "UNAUTHENTICATED";

// Some gateways nest the upstream error list under `extensions.response.body`.
#[derive(Deserialize, Debug, Clone)]
struct NestedErrorMessage {
    message: String,
}

#[derive(Deserialize, Debug, Clone)]
struct NestedErrorList {
    errors: Vec<NestedErrorMessage>,
}

#[derive(Deserialize, Debug, Clone)]
struct NestedErrorBody {
    body: NestedErrorList,
}

#[derive(Debug, Clone, Default)]
struct SimplifiedErrorList {
    errors: Vec<String>,
    unauthenticated: bool,
}

impl From<&Vec<graphql_client::Error>> for SimplifiedErrorList {
    fn from(x: &Vec<graphql_client::Error>) -> Self {
        let mut simplified = SimplifiedErrorList::default();

        for err in x.iter() {
            let extensions = err.extensions.as_ref();
            let code = extensions
                .and_then(|extensions| extensions.get("code"))
                .and_then(|code| code.as_str());
            if code == Some(UNAUTHENTICATED_CODE) {
                simplified.unauthenticated = true;
            }

            let nested = extensions
                .and_then(|extensions| extensions.get("response"))
                .and_then(|response| {
                    serde_json::from_value::<NestedErrorBody>(response.clone()).ok()
                });
            match nested {
                Some(nested) => simplified
                    .errors
                    .extend(nested.body.errors.into_iter().map(|x| x.message)),
                None => simplified.errors.push(err.message.clone()),
            }
        }

        simplified
    }
}

/// Re-export / renamed type alias for [`graphql_client::Response`]
pub type GraphQLResponse<T> = graphql_client::Response<T>;

/// Errors that may occur from using a [`GraphQLService`]
#[derive(thiserror::Error, Debug)]
pub enum GraphQLServiceError<T: Send + Sync + fmt::Debug> {
    /// There was no data field provided in the response
    #[error("No data field provided: {}", friendly_errors_detail.join(" "))]
    NoData {
        /// The GraphQL errors that were produced, if any
        errors: Vec<graphql_client::Error>,
        /// display ready decoration of `errors`
        friendly_errors_detail: Vec<String>,
    },
    /// The response returned some data, but there were errors
    #[error("Data was returned, but with errors: {}", friendly_errors_detail.join(" "))]
    PartialError {
        /// The partial data returned
        data: T,
        /// The GraphQL errors that were produced
        errors: Vec<graphql_client::Error>,
        /// display ready decoration of `errors`
        friendly_errors_detail: Vec<String>,
    },
    /// The server rejected the credentials sent with the request, or none were sent
    #[error("The request was not authenticated: {}", friendly_errors_detail.join(" "))]
    Unauthenticated {
        /// display ready decoration of the errors returned by the server
        friendly_errors_detail: Vec<String>,
    },
    /// Data serialization error
    #[error("Serialization error")]
    Serialization(serde_json::Error),
    /// Data deserialization error
    #[error("Deserialization error (status {status_code}): {error}")]
    Deserialization {
        /// The source error
        error: serde_json::Error,
        /// The data that was attempted to be deserialized
        data: Bytes,
        /// The [`StatusCode`] of the request
        status_code: StatusCode,
    },
    /// [`http`]-related error, probably from header-related tasks
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// Error that occurs from a failure to parse a [`Uri`] from a [`Url`]
    #[error("Unable to convert URL to URI.")]
    InvalidUri(#[from] InvalidUri),
    /// Errors that occur as a result of the underlying HTTP service failing
    #[error("Upstream service error: {}", .0)]
    UpstreamService(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl<T: Send + Sync + fmt::Debug> GraphQLServiceError<T> {
    /// Whether the server refused the request for lack of valid credentials
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, GraphQLServiceError::Unauthenticated { .. })
    }
}

/// Wrapper around [`GraphQLQuery::Variables`]
/// This type requires something more concrete around it to be used appropriately
pub struct GraphQLRequest<Q: GraphQLQuery> {
    variables: Q::Variables,
}

impl<Q> fmt::Debug for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{:?}", self.variables)
    }
}

impl<Q> PartialEq for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl<Q: GraphQLQuery> GraphQLRequest<Q> {
    /// Constructs a new [`GraphQLRequest`]
    pub const fn new(variables: Q::Variables) -> GraphQLRequest<Q> {
        GraphQLRequest { variables }
    }
    /// Consumes the [`GraphQLRequest`] and produces the inner [`GraphQLQuery::Variables`] object
    pub fn into_inner(self) -> Q::Variables {
        self.variables
    }
}

/// [`Layer`] that wraps a service with GraphQL middleware
#[derive(Default)]
pub struct GraphQLLayer {
    endpoint: Option<Url>,
}

impl GraphQLLayer {
    /// Constructs a new [`GraphQLLayer`]
    pub const fn new(endpoint: Url) -> GraphQLLayer {
        GraphQLLayer {
            endpoint: Some(endpoint),
        }
    }
}

impl<S> Layer<S> for GraphQLLayer {
    type Service = GraphQLService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        GraphQLService::new(self.endpoint.clone(), inner)
    }
}

/// Middleware that wraps a service in GraphQL functionality
#[derive(Clone, Debug)]
pub struct GraphQLService<S> {
    inner: S,
    endpoint: Option<Url>,
}

impl<S> GraphQLService<S> {
    /// Constructs a new [`GraphQLService`]
    pub const fn new(endpoint: Option<Url>, inner: S) -> GraphQLService<S> {
        GraphQLService { endpoint, inner }
    }
}

fn decode_response<T>(
    graphql_response: graphql_client::Response<T>,
) -> Result<T, GraphQLServiceError<T>>
where
    T: Send + Sync + fmt::Debug,
{
    match graphql_response.errors {
        Some(errors) if !errors.is_empty() => {
            let simplified = SimplifiedErrorList::from(&errors);
            if simplified.unauthenticated {
                return Err(GraphQLServiceError::Unauthenticated {
                    friendly_errors_detail: simplified.errors,
                });
            }
            match graphql_response.data {
                Some(data) => Err(GraphQLServiceError::PartialError {
                    data,
                    errors,
                    friendly_errors_detail: simplified.errors,
                }),
                None => Err(GraphQLServiceError::NoData {
                    errors,
                    friendly_errors_detail: simplified.errors,
                }),
            }
        }
        _ => graphql_response
            .data
            .ok_or_else(|| GraphQLServiceError::NoData {
                errors: Vec::default(),
                friendly_errors_detail: Vec::default(),
            }),
    }
}

impl<Q, S> Service<GraphQLRequest<Q>> for GraphQLService<S>
where
    Q: GraphQLQuery + Send + Sync + 'static,
    Q::Variables: Send,
    Q::ResponseData: Send + Sync + fmt::Debug,
    S: Service<HttpRequest, Response = HttpResponse> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: std::error::Error + Send + Sync,
{
    type Response = Q::ResponseData;
    type Error = GraphQLServiceError<Q::ResponseData>;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::poll_ready(&mut self.inner, cx)
            .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))
    }

    fn call(&mut self, req: GraphQLRequest<Q>) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let cloned = self.inner.clone();
        let mut client = std::mem::replace(&mut self.inner, cloned);

        let url = self.endpoint.clone();

        let fut = async move {
            let body = Q::build_query(req.into_inner());
            tracing::debug!(operation = body.operation_name, "sending graphql request");
            let body_bytes =
                Bytes::from(serde_json::to_vec(&body).map_err(GraphQLServiceError::Serialization)?);
            let req = http::Request::builder();
            let req = if let Some(url) = url.as_ref() {
                req.uri(Uri::from_str(url.as_ref())?)
            } else {
                req
            };
            let req = req
                .method(Method::POST)
                .header(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )
                .body(Full::new(body_bytes))
                .map_err(GraphQLServiceError::Http)?;
            let resp = client
                .call(req)
                .await
                .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))?;
            let status_code = resp.status();
            tracing::trace!(response_status = ?status_code, response_headers = ?resp.headers());
            let body = resp.body();
            let graphql_response: graphql_client::Response<Q::ResponseData> =
                serde_json::from_slice(body).map_err(|err| {
                    GraphQLServiceError::Deserialization {
                        error: err,
                        data: body.clone(),
                        status_code,
                    }
                })?;

            decode_response(graphql_response)
        };
        Box::pin(fut)
    }
}
