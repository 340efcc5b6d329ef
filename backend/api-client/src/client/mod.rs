//! The API client: construction, transport and the request pipeline.

pub(crate) mod base_url;
mod pipeline;
pub(crate) mod request_path;
pub mod transport;

pub use pipeline::NO_BODY;

use crate::config::ClientConfig;
use crate::error::ClientError;

use base_url::{SchemePolicy, parse_base_url};
use common::RedactedApiKey;

use log::debug;
use url::Url;

/// Default API origin.
pub const DEFAULT_API_URL: &str = "https://api.braintrust.dev";

/// Client bound to one credential, one origin and one default organization.
///
/// Immutable after construction and cheap to clone; clones share the
/// connection pool. Safe to use from many tasks at once.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: RedactedApiKey,
    base_url: Url,
    org_name: String,
    scheme_policy: SchemePolicy,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. No network I/O happens here.
    ///
    /// # Arguments
    /// * `api_key` - Bearer credential sent on every request
    /// * `api_url` - Origin of the API; a bare host is upgraded to `https://`
    /// * `org_name` - Default organization for calls that do not name one
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidBaseUrl`] for an explicit non-https scheme,
    /// a missing host, embedded credentials or a non-root path, and
    /// [`ClientError::InvalidCredential`] for a blank key.
    pub fn new(
        api_key: impl Into<String>,
        api_url: &str,
        org_name: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_policy(
            RedactedApiKey::new(api_key),
            api_url,
            org_name.into(),
            SchemePolicy::HttpsOnly,
        )
    }

    /// Create a client from loaded settings.
    ///
    /// # Errors
    /// Same as [`Client::new`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_policy(
            config.api_key.clone(),
            &config.api_url,
            config.org_name.clone(),
            SchemePolicy::HttpsOnly,
        )
    }

    /// Plain-HTTP loopback origins are accepted so tests can talk to a mock server.
    #[cfg(test)]
    pub(crate) fn new_for_loopback_tests(
        api_key: impl Into<String>,
        api_url: &str,
        org_name: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_policy(
            RedactedApiKey::new(api_key),
            api_url,
            org_name.into(),
            SchemePolicy::AllowLoopbackHttp,
        )
    }

    fn with_policy(
        api_key: RedactedApiKey,
        api_url: &str,
        org_name: String,
        scheme_policy: SchemePolicy,
    ) -> Result<Self, ClientError> {
        let base_url = parse_base_url(api_url, scheme_policy)?;
        let https_only = scheme_policy == SchemePolicy::HttpsOnly;
        let http = transport::build_http_client(&api_key, https_only)?;

        debug!(
            "API client created for {} (org: '{org_name}', key: {} chars)",
            base_url.as_str(),
            api_key.len()
        );

        Ok(Self {
            api_key,
            base_url,
            org_name,
            scheme_policy,
            http,
        })
    }

    /// Default organization applied when a call does not name one.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Validated API origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `explicit` if set, otherwise the default organization (if any).
    pub(crate) fn org_name_or_default(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .filter(|name| !name.is_empty())
            .or_else(|| Some(self.org_name.as_str()).filter(|name| !name.is_empty()))
            .map(str::to_string)
    }
}
