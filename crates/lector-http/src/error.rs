use bytes::Bytes;
use http::StatusCode;

/// Errors produced by the HTTP layer
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The server answered with a status this crate treats as a failure
    #[error("Bad Status code: {status_code}")]
    BadStatusCode {
        /// Status returned by the server
        status_code: StatusCode,
        /// Raw response body
        data: Bytes,
    },
    /// Failure while assembling an [`http`] request
    #[error("HTTP Error: {:?}", .0)]
    Http(#[from] http::Error),
    /// The request did not complete before its deadline
    #[error("Request timed out")]
    TimedOut,
    /// The response body could not be decoded
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The body could not be read or written
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// No connection could be made to the server
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Anything else
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HttpServiceError {
    /// Whether the error came from failing to connect
    pub const fn is_connect(&self) -> bool {
        matches!(self, HttpServiceError::Connect(_))
    }
}
