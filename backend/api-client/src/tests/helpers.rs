//! Shared fixtures for the mock-server tests.

use crate::client::Client;

use wiremock::MockServer;

/// Shaped like a real key so both the literal and the pattern redaction paths apply.
pub(crate) const TEST_API_KEY: &str = "sk-test0123456789abcdef";

pub(crate) const TEST_ORG: &str = "acme";

/// Start a mock server and a client pointed at it with the default organization set.
pub(crate) async fn mock_client() -> (MockServer, Client) {
    mock_client_with_org(TEST_ORG).await
}

pub(crate) async fn mock_client_with_org(org_name: &str) -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new_for_loopback_tests(TEST_API_KEY, &server.uri(), org_name)
        .expect("loopback client should build");
    (server, client)
}

/// The single request the server received, panicking if there was not exactly one.
pub(crate) async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
