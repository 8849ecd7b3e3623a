use std::collections::HashMap;

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::LectorClientError;

const JSON_CONTENT_TYPE: &str = "application/json";
const CLIENT_NAME: &str = "lector";

/// Function for building a [HeaderMap] from arbitrary key/value pairs, such
/// as headers supplied on the command line.
pub fn build(header_map: &HashMap<String, String>) -> Result<HeaderMap, LectorClientError> {
    let mut headers = HeaderMap::new();

    for (key, value) in header_map {
        let header_key = HeaderName::from_bytes(key.as_bytes())?;
        let header_value = HeaderValue::from_str(value)?;
        headers.append(header_key, header_value);
    }

    Ok(headers)
}

/// Builds the headers sent with every request to the platform API.
///
/// `access_token` is optional because the public profile views work
/// without one. When present it is sent as a bearer token and marked
/// sensitive so it never shows up in `Debug` output.
pub fn build_lector_headers(
    access_token: Option<&str>,
    client_version: &str,
) -> Result<HeaderMap, LectorClientError> {
    let mut headers = HeaderMap::new();

    let content_type = HeaderValue::from_str(JSON_CONTENT_TYPE)?;
    headers.insert(http::header::CONTENT_TYPE, content_type);

    let client_name = HeaderValue::from_str(CLIENT_NAME)?;
    headers.insert("x-client-name", client_name);
    tracing::debug!(?client_version);
    let client_version = HeaderValue::from_str(client_version)?;
    headers.insert("x-client-version", client_version);

    if let Some(token) = access_token {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))?;
        authorization.set_sensitive(true);
        headers.insert(http::header::AUTHORIZATION, authorization);
    }

    Ok(headers)
}
