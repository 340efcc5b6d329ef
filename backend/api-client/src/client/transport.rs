//! HTTPS transport: TLS floor, fixed timeout, identification and auth headers.

use crate::error::ClientError;

use common::RedactedApiKey;

use std::time::Duration;

use const_format::concatcp;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::tls;

/// Product name sent in the `User-Agent` header.
pub const PRODUCT_NAME: &str = "terraform-provider-braintrust";

/// `User-Agent` value carried by every request.
pub const USER_AGENT: &str = concatcp!(PRODUCT_NAME, "/", env!("CARGO_PKG_VERSION"));

/// Upper bound for a whole exchange, connect through last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Lowest TLS version the transport will negotiate.
pub const MIN_TLS_VERSION: tls::Version = tls::Version::TLS_1_2;

/// Build the shared connection pool for one credential.
///
/// `https_only` is always true outside of the crate's own tests.
#[track_caller]
pub(crate) fn build_http_client(
    api_key: &RedactedApiKey,
    https_only: bool,
) -> Result<reqwest::Client, ClientError> {
    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .min_tls_version(MIN_TLS_VERSION)
        .https_only(https_only)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .default_headers(auth_headers(api_key)?)
        .build()?;

    Ok(client)
}

#[track_caller]
fn auth_headers(api_key: &RedactedApiKey) -> Result<HeaderMap, ClientError> {
    if api_key.is_blank() {
        return Err(ClientError::invalid_credential("API key cannot be empty"));
    }

    let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose())).map_err(|_| {
        ClientError::invalid_credential("API key contains characters not allowed in a header")
    })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
