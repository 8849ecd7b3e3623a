//! Mocking support for services built on tower.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tower::Service;

use crate::ResponseFuture;

pub use mockall as mockall_;
pub use pastey as paste_;

/// Generates a `Mock<Name>Service` implementing [`tower::Service`] for the
/// given request, response and error types. Calls resolve immediately, so
/// expectations are set with `futures::future::ready(..)`.
#[macro_export]
macro_rules! mock_service {
    ($name:ident, $request:ty, $response:ty, $error:ty) => {
        $crate::test::paste_::paste! {
            $crate::test::mockall_::mock! {
                #[allow(dead_code)]
                #[derive(Debug)]
                pub [<$name Service>] {}
                #[allow(dead_code)]
                impl tower::Service<$request> for [<$name Service>] {
                    type Response = $response;
                    type Error = $error;
                    type Future = futures::future::Ready<Result<$response, $error>>;
                    #[allow(clippy::needless_lifetimes)]
                    fn poll_ready<'a>(
                        &mut self,
                        _cx: &mut std::task::Context<'a>,
                    ) -> std::task::Poll<Result<(), $error>>;

                    fn call(&mut self, req: $request) -> futures::future::Ready<Result<$response, $error>>;
                }
            }
        }
    };
}

pub use mock_service;

/// Shares one mock between clones, so a mock can sit inside a
/// [`tower::util::BoxCloneService`] and still see every call.
pub struct MockCloneService<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for MockCloneService<S> {
    fn clone(&self) -> Self {
        MockCloneService {
            inner: self.inner.clone(),
        }
    }
}

impl<S> MockCloneService<S> {
    pub fn new(inner: S) -> MockCloneService<S> {
        MockCloneService {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    // a failed expectation panics while the lock is held; later calls still
    // have to reach the mock to report it
    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Req, S> Service<Req> for MockCloneService<S>
where
    S: Service<Req>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = ResponseFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.lock().poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        Box::pin(self.lock().call(req))
    }
}

#[cfg(test)]
mod tests {
    use tower::ServiceExt;

    use super::*;

    mock_service!(Echo, u32, u32, std::convert::Infallible);

    #[tokio::test]
    async fn clones_share_one_mock() {
        let mut mock = MockEchoService::new();
        mock.expect_poll_ready()
            .times(2)
            .returning(|_| std::task::Poll::Ready(Ok(())));
        mock.expect_call()
            .times(2)
            .returning(|n| futures::future::ready(Ok(n + 1)));

        let service = MockCloneService::new(mock);
        let first = service.clone().oneshot(1).await.unwrap();
        let second = service.oneshot(41).await.unwrap();

        assert_eq!((first, second), (2, 42));
    }
}
