//! Retry policy for transient transport failures

use std::time::Duration;

use http::StatusCode;
use tower::{
    retry::{
        backoff::{Backoff, ExponentialBackoff, ExponentialBackoffMaker, InvalidBackoff, MakeBackoff},
        Policy,
    },
    util::rng::HasherRng,
};

use crate::{HttpRequest, HttpResponse, HttpServiceError};

const MIN_BACKOFF: Duration = Duration::from_millis(50);
const MAX_BACKOFF: Duration = Duration::from_millis(1000);

/// [`Policy`] that retries timeouts, connection failures and retryable
/// status codes with exponential backoff, up to `max` extra attempts
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    count: usize,
    max: usize,
    backoff: ExponentialBackoff,
}

impl RetryPolicy {
    /// Creates a policy allowing `max` retries after the first attempt
    pub fn new(max: usize) -> Result<RetryPolicy, InvalidBackoff> {
        let backoff =
            ExponentialBackoffMaker::new(MIN_BACKOFF, MAX_BACKOFF, 0.99, HasherRng::default())?
                .make_backoff();
        Ok(RetryPolicy {
            count: 0,
            max,
            backoff,
        })
    }

    fn increment(&mut self) {
        self.count += 1
    }

    const fn can_retry(&self) -> bool {
        self.count < self.max
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
        || matches!(
            status,
            StatusCode::TOO_MANY_REQUESTS | StatusCode::REQUEST_TIMEOUT
        )
}

impl Policy<HttpRequest, HttpResponse, HttpServiceError> for RetryPolicy {
    type Future = tokio::time::Sleep;

    fn retry(
        &mut self,
        _: &mut HttpRequest,
        result: &mut Result<HttpResponse, HttpServiceError>,
    ) -> Option<Self::Future> {
        if !self.can_retry() {
            return None;
        }
        let retryable = match result {
            Err(HttpServiceError::TimedOut) | Err(HttpServiceError::Connect(_)) => true,
            Err(_) => false,
            Ok(resp) => is_retryable_status(resp.status()),
        };
        if retryable {
            self.increment();
            tracing::debug!(attempt = self.count, max = self.max, "retrying request");
            Some(self.backoff.next_backoff())
        } else {
            None
        }
    }

    fn clone_request(&mut self, req: &HttpRequest) -> Option<HttpRequest> {
        Some(req.clone())
    }
}
