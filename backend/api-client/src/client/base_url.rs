//! Base origin parsing and validation.
//!
//! Scheme policy: a host given without a scheme is upgraded to `https://`;
//! an explicit `https://` is accepted; any other explicit scheme (including
//! `http://`) is rejected. The origin must have a host, no userinfo, no
//! query or fragment and no path beyond `/`.

use crate::error::ClientError;

use url::Url;
#[cfg(test)]
use url::Host;

const HTTPS_SCHEME: &str = "https";
const SCHEME_SEPARATOR: &str = "://";

/// Which schemes an origin may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SchemePolicy {
    HttpsOnly,
    /// Plain HTTP on loopback hosts only; used by the crate's own mock-server tests.
    #[cfg(test)]
    AllowLoopbackHttp,
}

/// Parse a user-supplied base origin under `policy`.
#[track_caller]
pub(crate) fn parse_base_url(raw: &str, policy: SchemePolicy) -> Result<Url, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_base_url("base URL cannot be empty"));
    }

    let candidate = if trimmed.contains(SCHEME_SEPARATOR) {
        trimmed.to_string()
    } else {
        format!("{HTTPS_SCHEME}{SCHEME_SEPARATOR}{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| {
        ClientError::invalid_base_url(format!("'{trimmed}' is not a valid URL: {e}"))
    })?;

    validate_origin(&url, policy)?;
    Ok(url)
}

/// Check that `url` is still an acceptable origin. Runs on every request.
#[track_caller]
pub(crate) fn validate_origin(url: &Url, policy: SchemePolicy) -> Result<(), ClientError> {
    if !scheme_allowed(url, policy) {
        return Err(ClientError::invalid_base_url(format!(
            "scheme '{}' is not allowed, the API must be reached over https",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ClientError::invalid_base_url("base URL must include a host"));
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(ClientError::invalid_base_url(
            "base URL must not embed credentials",
        ));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::invalid_base_url(
            "base URL must not carry a query or fragment",
        ));
    }

    if url.path() != "/" {
        return Err(ClientError::invalid_base_url(format!(
            "base URL must be an origin without a path, got '{}'",
            url.path()
        )));
    }

    Ok(())
}

fn scheme_allowed(url: &Url, policy: SchemePolicy) -> bool {
    if url.scheme() == HTTPS_SCHEME {
        return true;
    }

    match policy {
        SchemePolicy::HttpsOnly => false,
        #[cfg(test)]
        SchemePolicy::AllowLoopbackHttp => url.scheme() == "http" && is_loopback(url),
    }
}

#[cfg(test)]
fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(domain)) => domain == "localhost",
        None => false,
    }
}
