use api_client::client::transport::USER_AGENT;
use api_client::{Client, ClientError, DEFAULT_API_URL};

const KEY: &str = "sk-integration-0123456789";

/// **VALUE**: The production constructor only ever talks https.
///
/// **WHY THIS MATTERS**: The bearer token rides on every request; a
/// plain-http origin would put it on the wire in cleartext.
///
/// **BUG THIS CATCHES**: A test-only relaxation of the scheme policy leaking
/// into the public constructor.
#[test]
fn given_http_origin_when_constructing_then_rejected() {
    for origin in ["http://api.braintrust.dev", "http://127.0.0.1:8080", "HTTP://localhost"] {
        let err = Client::new(KEY, origin, "acme").unwrap_err();

        assert!(
            matches!(err, ClientError::InvalidBaseUrl { .. }),
            "{origin} should be rejected"
        );
    }
}

#[test]
fn given_bare_host_when_constructing_then_https_is_assumed() {
    let client = Client::new(KEY, "api.braintrust.dev", "acme").unwrap();

    assert_eq!(client.base_url().scheme(), "https");
    assert_eq!(client.base_url().as_str(), "https://api.braintrust.dev/");
    assert_eq!(client.org_name(), "acme");
}

#[test]
fn given_default_origin_when_constructing_then_accepted() {
    let client = Client::new(KEY, DEFAULT_API_URL, "").unwrap();

    assert_eq!(client.base_url().host_str(), Some("api.braintrust.dev"));
    assert_eq!(client.org_name(), "");
}

#[test]
fn given_origin_with_extras_when_constructing_then_rejected() {
    for origin in [
        "https://user@api.braintrust.dev",
        "https://api.braintrust.dev/v1",
        "https://api.braintrust.dev?x=1",
        "https://:443",
    ] {
        assert!(
            Client::new(KEY, origin, "").is_err(),
            "{origin} should be rejected"
        );
    }
}

#[test]
fn given_blank_or_malformed_key_when_constructing_then_invalid_credential() {
    for key in ["", "   ", "sk-bad\nkey"] {
        let err = Client::new(key, DEFAULT_API_URL, "").unwrap_err();

        assert!(
            matches!(err, ClientError::InvalidCredential { .. }),
            "{key:?} should be rejected"
        );
        assert!(err.is_validation());
    }
}

#[test]
fn given_client_when_debug_formatted_then_key_is_not_exposed() {
    let client = Client::new(KEY, DEFAULT_API_URL, "acme").unwrap();

    let debug = format!("{client:?}");

    assert!(!debug.contains(KEY));
}

#[test]
fn given_crate_version_then_user_agent_embeds_it() {
    assert_eq!(
        USER_AGENT,
        format!("terraform-provider-braintrust/{}", env!("CARGO_PKG_VERSION"))
    );
}
