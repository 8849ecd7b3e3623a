#![warn(missing_docs)]

//! Provides [`tower`] implementations for HTTP Requests

use std::{fmt::Debug, str::Utf8Error, time::Duration};

/// Install ring as the default rustls crypto provider. This runs automatically
/// as a global constructor in every binary that links lector-http (directly or
/// transitively).
#[ctor::ctor]
fn install_ring_crypto_provider() {
    // .ok() because the provider may already be installed, and that's the only
    // case that causes this to error
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();
}

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
pub use http_body::Body;
pub use http_body_util::Full;
use tower::{timeout::error::Elapsed, util::BoxCloneService};

pub mod body;
mod error;
pub mod extend_headers;
mod reqwest;
pub mod retry;
pub mod timeout;

pub use error::HttpServiceError;
pub use reqwest::ReqwestService;

/// Ease-of-use synonym for the request type this crate operates on
pub type HttpRequest = http::Request<Full<Bytes>>;
/// Ease-of-use synonym for the response type this crate operates on
pub type HttpResponse = http::Response<Bytes>;
/// Ease-of-use synonym for the [`Service`](tower::Service) type this crate provides
pub type HttpService = BoxCloneService<HttpRequest, HttpResponse, HttpServiceError>;

/// Settings for the [`HttpService`] a [`ReqwestService`] builds.
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    /// per-attempt deadline, 90 seconds when unset
    timeout: Option<Duration>,
}

impl From<Box<dyn std::error::Error + Send + Sync>> for HttpServiceError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        if err.is::<Elapsed>() {
            return HttpServiceError::TimedOut;
        }
        match err.downcast::<HttpServiceError>() {
            Ok(err) => *err,
            Err(err) => match err.downcast::<::reqwest::Error>() {
                Ok(err) => HttpServiceError::from(*err),
                Err(err) => HttpServiceError::Unexpected(err),
            },
        }
    }
}

impl From<Utf8Error> for HttpServiceError {
    fn from(value: Utf8Error) -> Self {
        HttpServiceError::Decode(Box::new(value))
    }
}
