use api_client::config::ClientConfig;
use api_client::{Client, ClientError};

use std::io::Write;

use tempfile::NamedTempFile;

#[test]
fn given_config_file_with_http_origin_when_building_client_then_rejected() {
    // GIVEN: A config that parses but points at plain http
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "api_url = \"http://api.braintrust.dev\"").unwrap();
    writeln!(file, "api_key_env = \"TEST_KEY\"").unwrap();

    let config = ClientConfig::load_with_lookup(file.path(), |name| {
        (name == "TEST_KEY").then(|| "sk-file".to_string())
    })
    .unwrap();

    // WHEN: Turning it into a client
    let err = Client::from_config(&config).unwrap_err();

    // THEN: The scheme policy still applies
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[test]
fn given_config_from_lookup_when_building_client_then_values_carry_over() {
    let config = ClientConfig::from_lookup(|name| match name {
        "BRAINTRUST_API_KEY" => Some("sk-env".to_string()),
        "BRAINTRUST_ORG_NAME" => Some("acme".to_string()),
        _ => None,
    })
    .unwrap();

    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.org_name(), "acme");
    assert_eq!(client.base_url().as_str(), "https://api.braintrust.dev/");
}
