use std::time::Duration;

use lector_client::LectorClient;
use lector_http::{HttpService, HttpServiceConfig, HttpServiceError, ReqwestService};
use thiserror::Error;
use url::Url;

use crate::utils::env::{LectorEnv, LectorEnvKey, mask_token};
use crate::{LectorError, LectorResult};

/// the platform's production API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.daily.dev/graphql";

/// transport retries used when `LECTOR_RETRIES` is not set
pub const DEFAULT_RETRIES: usize = 2;

/// the version of Lector currently set in `Cargo.toml`
const LECTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Problems resolving how to reach the API
#[derive(Error, Debug)]
pub enum LectorConfigError {
    #[error("this command needs an access token, but none was provided")]
    MissingAccessToken,

    #[error("could not parse \"{value}\" from ${key}")]
    InvalidEnvValue { key: LectorEnvKey, value: String },

    #[error("\"{endpoint}\" is not a valid endpoint: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("could not set up the HTTP client")]
    Http(#[from] HttpServiceError),
}

/// Everything needed to build a [`LectorClient`], after flags and
/// environment have been merged. Flags win over the environment, which
/// wins over the defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: Url,
    access_token: Option<String>,
    timeout: Option<Duration>,
    retries: usize,
    version: String,
}

impl ClientConfig {
    pub fn new(
        endpoint_override: Option<Url>,
        token_override: Option<String>,
        env_store: &LectorEnv,
    ) -> LectorResult<ClientConfig> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => {
                let endpoint = env_store
                    .get(LectorEnvKey::Endpoint)?
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
                Url::parse(&endpoint).map_err(|e| LectorConfigError::InvalidEndpoint {
                    endpoint: endpoint.clone(),
                    reason: e.to_string(),
                })?
            }
        };
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(LectorConfigError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: "only http and https are supported".to_string(),
            }
            .into());
        }

        let access_token = match token_override {
            Some(token) => Some(token),
            None => env_store.get(LectorEnvKey::AccessToken)?,
        }
        .filter(|token| !token.is_empty());

        let timeout = parse_env::<u64>(env_store, LectorEnvKey::TimeoutSecs)?.map(Duration::from_secs);
        let retries = parse_env::<usize>(env_store, LectorEnvKey::Retries)?.unwrap_or(DEFAULT_RETRIES);

        let version = if cfg!(debug_assertions) {
            format!("{LECTOR_VERSION} (dev)")
        } else {
            LECTOR_VERSION.to_string()
        };

        tracing::debug!(
            endpoint = %endpoint,
            access_token = ?access_token.as_deref().map(mask_token),
            ?timeout,
            retries,
            "resolved client configuration"
        );

        Ok(ClientConfig {
            endpoint,
            access_token,
            timeout,
            retries,
            version,
        })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub const fn retries(&self) -> usize {
        self.retries
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Bound on a whole request, retries included: one `timeout` per attempt
    pub fn total_timeout(&self) -> Option<Duration> {
        let attempts = u32::try_from(self.retries.saturating_add(1)).unwrap_or(u32::MAX);
        self.timeout
            .map(|timeout| timeout.checked_mul(attempts).unwrap_or(Duration::MAX))
    }

    pub const fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// A client for operations that anyone may run. The access token is
    /// still sent when one is configured.
    pub fn get_client(&self) -> LectorResult<LectorClient> {
        let config = HttpServiceConfig::builder().and_timeout(self.timeout).build();
        let http_service = ReqwestService::builder()
            .config(config)
            .build()
            .map_err(|e| LectorConfigError::Http(HttpServiceError::from(e)))?;
        let client = LectorClient::builder()
            .endpoint(self.endpoint.clone())
            .http_service(HttpService::from(http_service))
            .and_access_token(self.access_token.clone())
            .client_version(self.version.clone())
            .retries(self.retries)
            .and_total_timeout(self.total_timeout())
            .build()?;
        Ok(client)
    }

    /// A client for operations on the reader's own data
    pub fn get_authenticated_client(&self) -> LectorResult<LectorClient> {
        if !self.has_access_token() {
            return Err(LectorError::new(LectorConfigError::MissingAccessToken));
        }
        self.get_client()
    }
}

fn parse_env<T: std::str::FromStr>(
    env_store: &LectorEnv,
    key: LectorEnvKey,
) -> LectorResult<Option<T>> {
    match env_store.get(key)? {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(LectorConfigError::InvalidEnvValue { key, value }.into()),
        },
        None => Ok(None),
    }
}
