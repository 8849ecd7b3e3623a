use std::fmt;

use http::header::{InvalidHeaderName, InvalidHeaderValue};
use lector_graphql::GraphQLServiceError;
use thiserror::Error;
use tower::retry::backoff::InvalidBackoff;

/// Broad classification of why a request failed, so callers can react
/// without inspecting the boxed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The request never produced a usable HTTP response
    Transport,
    /// The server refused the request's credentials
    Unauthenticated,
    /// The server answered with GraphQL errors
    GraphQL,
    /// The request or response body could not be (de)serialized
    Decode,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FailureReason::Transport => "transport",
            FailureReason::Unauthenticated => "unauthenticated",
            FailureReason::GraphQL => "graphql",
            FailureReason::Decode => "decode",
        };
        f.write_str(reason)
    }
}

/// LectorClientError represents all possible failures that can occur during a client request.
#[derive(Error, Debug)]
pub enum LectorClientError {
    /// An operation could not be completed. Carries the underlying transport or protocol error.
    #[error("the {operation} request failed ({reason}): {source}")]
    RequestFailed {
        /// GraphQL operation name
        operation: &'static str,
        /// What went wrong, broadly
        reason: FailureReason,
        /// The underlying error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Tried to build a [HeaderMap](http::HeaderMap) with an invalid header name.
    #[error("invalid header name")]
    InvalidHeaderName(#[from] InvalidHeaderName),

    /// Tried to build a [HeaderMap](http::HeaderMap) with an invalid header value.
    #[error("invalid header value")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    /// The retry policy could not be constructed.
    #[error("could not configure retries: {0}")]
    InvalidRetryPolicy(#[from] InvalidBackoff),

    /// A date range whose start is after its end.
    #[error("invalid date range: {after} is later than {before}")]
    InvalidDateRange {
        /// requested start of the range
        after: String,
        /// requested end of the range
        before: String,
    },

    /// A cursor was given, but it was empty.
    #[error("a pagination cursor cannot be empty")]
    EmptyCursor,
}

impl LectorClientError {
    /// Wraps an error from the GraphQL layer into [`LectorClientError::RequestFailed`]
    pub fn request_failed<T>(operation: &'static str, error: GraphQLServiceError<T>) -> Self
    where
        T: Send + Sync + fmt::Debug + 'static,
    {
        let reason = match &error {
            GraphQLServiceError::Unauthenticated { .. } => FailureReason::Unauthenticated,
            GraphQLServiceError::NoData { .. } | GraphQLServiceError::PartialError { .. } => {
                FailureReason::GraphQL
            }
            GraphQLServiceError::Serialization(_) | GraphQLServiceError::Deserialization { .. } => {
                FailureReason::Decode
            }
            GraphQLServiceError::Http(_)
            | GraphQLServiceError::InvalidUri(_)
            | GraphQLServiceError::UpstreamService(_) => FailureReason::Transport,
        };
        LectorClientError::RequestFailed {
            operation,
            reason,
            source: Box::new(error),
        }
    }

    /// The failure classification, if this error came from a request
    pub const fn reason(&self) -> Option<FailureReason> {
        match self {
            LectorClientError::RequestFailed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
