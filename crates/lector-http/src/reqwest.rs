use std::{pin::Pin, time::Duration};

use buildstructor::buildstructor;
use futures::Future;
use reqwest::ClientBuilder;
use tower::{util::BoxCloneService, Service, ServiceBuilder, ServiceExt};

use crate::{
    body::body_to_bytes, HttpRequest, HttpResponse, HttpService, HttpServiceConfig,
    HttpServiceError,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// A [`Service`] that wraps a [`reqwest`] client and uses [`http`] constructs for requests and responses
#[derive(Clone, Debug)]
pub struct ReqwestService {
    client: BoxCloneService<reqwest::Request, reqwest::Response, HttpServiceError>,
}

#[buildstructor]
impl ReqwestService {
    /// Constructs a new [`ReqwestService`]
    #[builder]
    pub fn new(
        config: Option<HttpServiceConfig>,
        client: Option<reqwest::Client>,
    ) -> Result<ReqwestService, reqwest::Error> {
        let config = config.unwrap_or_default();
        let client = match client {
            Some(client) => client,
            None => ClientBuilder::new().gzip(true).brotli(true).build()?,
        };
        let client = ServiceBuilder::new()
            .map_err(HttpServiceError::from)
            .timeout((*config.timeout()).unwrap_or(DEFAULT_TIMEOUT))
            .service(client)
            .boxed_clone();
        Ok(ReqwestService { client })
    }
}

impl From<reqwest::Error> for HttpServiceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_body() {
            HttpServiceError::Body(value.into())
        } else if value.is_connect() {
            HttpServiceError::Connect(value.into())
        } else if value.is_timeout() {
            HttpServiceError::TimedOut
        } else if value.is_decode() {
            HttpServiceError::Decode(value.into())
        } else {
            HttpServiceError::Unexpected(value.into())
        }
    }
}

impl Service<HttpRequest> for ReqwestService {
    type Response = HttpResponse;
    type Error = HttpServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.client.poll_ready(cx)
    }

    fn call(&mut self, mut req: HttpRequest) -> Self::Future {
        let mut client = lector_tower::service::replace_ready_service::<_, reqwest::Request>(&mut self.client);
        let fut = async move {
            let bytes = body_to_bytes(req.body_mut())
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            let req = req.map(move |_| reqwest::Body::from(bytes));
            let req = reqwest::Request::try_from(req)?;
            let mut resp = http::Response::from(client.call(req).await?);
            let bytes = body_to_bytes(resp.body_mut()).await?;
            Ok(resp.map(|_| bytes))
        };
        Box::pin(fut)
    }
}

impl From<ReqwestService> for HttpService {
    fn from(value: ReqwestService) -> Self {
        value.boxed_clone()
    }
}
