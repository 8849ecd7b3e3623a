//! Middleware that stamps a fixed set of headers onto every request

use http::HeaderMap;
use tower::{Layer, Service};

/// [`Layer`] producing [`ExtendHeaders`]
pub struct ExtendHeadersLayer {
    headers: HeaderMap,
}

impl ExtendHeadersLayer {
    /// Creates a layer that adds `headers` to each request, replacing values already present
    pub fn new(headers: impl Into<HeaderMap>) -> ExtendHeadersLayer {
        ExtendHeadersLayer {
            headers: headers.into(),
        }
    }
}

impl<S: Clone> Layer<S> for ExtendHeadersLayer {
    type Service = ExtendHeaders<S>;
    fn layer(&self, inner: S) -> Self::Service {
        ExtendHeaders {
            headers: self.headers.clone(),
            inner,
        }
    }
}

/// Service that adds its headers to every request before passing it on
#[derive(Clone)]
pub struct ExtendHeaders<S: Clone> {
    headers: HeaderMap,
    inner: S,
}

impl<S: Clone> ExtendHeaders<S> {
    /// Wraps `inner`
    pub const fn new(headers: HeaderMap, inner: S) -> ExtendHeaders<S> {
        ExtendHeaders { headers, inner }
    }
}

impl<Req, S> Service<http::Request<Req>> for ExtendHeaders<S>
where
    S: Service<http::Request<Req>> + Clone,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<Req>) -> Self::Future {
        for (name, value) in self.headers.iter() {
            req.headers_mut().insert(name.clone(), value.clone());
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use http::{HeaderMap, HeaderValue};
    use speculoos::prelude::*;
    use tower::{service_fn, Service, ServiceBuilder, ServiceExt};

    use super::ExtendHeadersLayer;

    #[tokio::test]
    async fn headers_are_added_and_override_existing_values() {
        let mut headers = HeaderMap::new();
        headers.insert("x-client-name", HeaderValue::from_static("lector"));
        headers.insert("x-request-source", HeaderValue::from_static("cli"));

        let mut service = ServiceBuilder::new()
            .layer(ExtendHeadersLayer::new(headers))
            .service(service_fn(|req: http::Request<()>| async move {
                Ok::<_, Infallible>(req.headers().clone())
            }));

        let request = http::Request::builder()
            .header("x-request-source", "test")
            .header("x-untouched", "yes")
            .body(())
            .unwrap();
        let seen = service.ready().await.unwrap().call(request).await.unwrap();

        assert_that!(seen.get("x-client-name"))
            .is_some()
            .is_equal_to(&HeaderValue::from_static("lector"));
        assert_that!(seen.get_all("x-request-source").iter().count()).is_equal_to(1);
        assert_that!(seen.get("x-request-source"))
            .is_some()
            .is_equal_to(&HeaderValue::from_static("cli"));
        assert_that!(seen.get("x-untouched")).is_some();
    }
}
