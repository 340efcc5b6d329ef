// Request pipeline behaviour against a mock server: decoding, error
// classification, redaction, headers and cancellation.

use super::helpers::{TEST_API_KEY, mock_client, only_request};

use crate::NO_BODY;
use crate::client::transport::USER_AGENT;
use crate::context::RequestContext;
use crate::error::ClientError;

use models::dataset::Dataset;

use std::time::Duration;

use reqwest::Method;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: The happy path: a GET decodes straight into the resource type.
#[tokio::test]
async fn given_dataset_exists_when_get_dataset_then_returns_decoded_dataset() {
    // GIVEN: The server knows dataset ds-1
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/v1/dataset/ds-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ds-1",
            "name": "golden",
            "project_id": "p-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching it
    let dataset = client
        .get_dataset(&RequestContext::background(), "ds-1")
        .await
        .unwrap();

    // THEN: All fields survive decoding
    assert_eq!(dataset.id, "ds-1");
    assert_eq!(dataset.name, "golden");
    assert_eq!(dataset.project_id.as_deref(), Some("p-1"));
}

/// **VALUE**: A 404 surfaces as a structured error callers can classify.
///
/// **WHY THIS MATTERS**: Resource lifecycle code treats "not found" as "gone"
/// and must be able to tell it apart from every other failure without
/// parsing message text.
#[tokio::test]
async fn given_missing_dataset_when_get_dataset_then_api_error_is_not_found() {
    // GIVEN: The server answers 404 with a JSON error body
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/v1/dataset/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Dataset not found"
        })))
        .mount(&server)
        .await;

    // WHEN: Fetching it
    let err = client
        .get_dataset(&RequestContext::background(), "missing")
        .await
        .unwrap_err();

    // THEN: Status, message and predicates line up
    let api_error = err.api_error().expect("should be an API error");
    assert_eq!(api_error.status.as_u16(), 404);
    assert_eq!(api_error.message, "Dataset not found");
    assert!(err.is_not_found());
    assert!(crate::is_not_found(&err));
    assert!(!crate::is_rate_limited(&err));
    assert!(!crate::is_unauthorized(&err));
}

#[tokio::test]
async fn given_error_and_message_fields_when_classified_then_error_field_wins() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "name is required",
            "message": "Bad Request",
            "details": {"field": "name"}
        })))
        .mount(&server)
        .await;

    let err = client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap_err();

    let api_error = err.api_error().unwrap();
    assert_eq!(api_error.message, "name is required");
    assert_eq!(api_error.details.get("field"), Some(&json!("name")));
}

#[tokio::test]
async fn given_plain_text_error_body_when_classified_then_text_becomes_message() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.api_error().unwrap().message, "slow down");
    assert!(err.api_error().unwrap().details.is_empty());
}

#[tokio::test]
async fn given_empty_error_body_when_classified_then_reason_phrase_is_message() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.api_error().unwrap().message, "Internal Server Error");
    assert_eq!(err.error_category(), "server_error");
}

/// **VALUE**: The credential never leaves the pipeline inside an error.
///
/// **WHY THIS MATTERS**: Error messages end up in terminal output and CI logs.
/// A server that echoes the Authorization header back must not leak the key.
///
/// **BUG THIS CATCHES**: Redacting only the JSON branch, or only the message
/// and not the details.
#[tokio::test]
async fn given_error_echoing_credential_when_classified_then_credential_is_redacted() {
    // GIVEN: A 401 whose JSON body repeats the key in the message and details
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": format!("invalid token Bearer {TEST_API_KEY}"),
            "details": {"header": format!("Authorization: Bearer {TEST_API_KEY}"), "tries": 3}
        })))
        .mount(&server)
        .await;

    // WHEN: Any call fails
    let err = client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap_err();

    // THEN: Neither the message, the details nor the Display output contain it
    assert!(err.is_unauthorized());
    let api_error = err.api_error().unwrap();
    assert!(!api_error.message.contains(TEST_API_KEY));
    assert!(api_error.message.contains("[REDACTED]"));
    let details = serde_json::to_string(&api_error.details).unwrap();
    assert!(!details.contains(TEST_API_KEY));
    assert_eq!(api_error.details.get("tries"), Some(&json!(3)));
    assert!(!err.to_string().contains(TEST_API_KEY));
    assert!(!format!("{err:?}").contains(TEST_API_KEY));
}

#[tokio::test]
async fn given_text_error_echoing_credential_when_classified_then_credential_is_redacted() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(502).set_body_string(format!("upstream rejected {TEST_API_KEY}")),
        )
        .mount(&server)
        .await;

    let err = client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap_err();

    let message = &err.api_error().unwrap().message;
    assert!(!message.contains(TEST_API_KEY));
    assert!(message.starts_with("upstream rejected"));
}

/// **VALUE**: Every request identifies itself and authenticates.
#[tokio::test]
async fn given_any_request_when_sent_then_auth_and_user_agent_headers_are_set() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p-1", "name": "x"})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap();

    assert!(USER_AGENT.starts_with("terraform-provider-braintrust/"));
}

#[tokio::test]
async fn given_no_body_when_sent_then_content_type_is_absent() {
    let (server, client) = mock_client().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client
        .delete_project(&RequestContext::background(), "p-1")
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert!(request.headers.get("content-type").is_none());
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn given_body_when_sent_then_json_with_content_type() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path("/v1/custom"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response: Value = client
        .execute(
            &RequestContext::background(),
            Method::POST,
            "/v1/custom",
            Some(&json!({"a": 1})),
        )
        .await
        .unwrap();

    assert_eq!(response, json!({"ok": true}));
    let request = only_request(&server).await;
    assert_eq!(request.body_json::<Value>().unwrap(), json!({"a": 1}));
}

#[tokio::test]
async fn given_empty_success_body_when_decoding_option_then_returns_none() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result: Option<Dataset> = client
        .execute(&RequestContext::background(), Method::GET, "/v1/dataset/ds-1", NO_BODY)
        .await
        .unwrap();

    assert!(result.is_none());
}

/// **BUG THIS CATCHES**: A success body that does not match the expected type
/// being reported as an API error, or silently defaulted.
#[tokio::test]
async fn given_malformed_success_body_when_decoding_then_decode_error_with_status() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client
        .get_dataset(&RequestContext::background(), "ds-1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }));
    assert_eq!(err.status_code(), Some(200));
    assert!(err.api_error().is_none());
}

/// **VALUE**: Paths that could escape the API root never reach the network.
///
/// **BUG THIS CATCHES**: Relying on the server to reject traversal, or
/// validating only the raw form and missing percent-encoded dot segments.
#[tokio::test]
async fn given_unsafe_paths_when_executed_then_rejected_without_request() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let unsafe_paths = [
        "",
        "v1/project",
        "https://evil.example/v1/project",
        "//evil.example/v1/project",
        "/v1/../admin",
        "/v1/./project",
        "/v1/%2e%2e/admin",
        "/v1/%2E%2E%2Fadmin",
        "/v1/project#frag",
        "/v1\\project",
        "/v1/pro\nject",
    ];

    for unsafe_path in unsafe_paths {
        let err = client
            .execute::<(), Value>(&RequestContext::background(), Method::GET, unsafe_path, NO_BODY)
            .await
            .unwrap_err();

        assert!(
            matches!(err, ClientError::InvalidPath { .. }),
            "{unsafe_path:?} should be rejected, got {err}"
        );
        assert!(err.is_validation());
    }
}

#[tokio::test]
async fn given_path_with_query_when_executed_then_query_reaches_server() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/v1/project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
        .mount(&server)
        .await;

    let _: Value = client
        .execute(
            &RequestContext::background(),
            Method::GET,
            "/v1/project?limit=5&project_name=a%20b",
            NO_BODY,
        )
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("limit=5&project_name=a%20b"));
}

#[tokio::test]
async fn given_cancelled_context_when_executed_then_no_request_is_sent() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = RequestContext::background();
    ctx.cancel();

    let err = client.get_project(&ctx, "p-1").await.unwrap_err();

    assert!(matches!(err, ClientError::Cancelled { .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn given_expired_deadline_when_executed_then_no_request_is_sent() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = RequestContext::background().with_deadline(tokio::time::Instant::now());

    let err = client.get_project(&ctx, "p-1").await.unwrap_err();

    assert!(matches!(err, ClientError::DeadlineExceeded { .. }));
}

/// **VALUE**: Cancelling mid-flight aborts promptly instead of waiting for the
/// 60 second transport timeout.
#[tokio::test]
async fn given_slow_server_when_token_cancelled_then_returns_cancelled() {
    // GIVEN: A server that takes far longer than the test
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let ctx = RequestContext::with_cancellation(token.clone());

    // WHEN: The caller cancels shortly after the request starts
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });
    let started = std::time::Instant::now();
    let err = client.get_project(&ctx, "p-1").await.unwrap_err();

    // THEN: The call returns Cancelled well before the server would answer
    assert!(matches!(err, ClientError::Cancelled { .. }));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn given_slow_server_when_deadline_passes_then_returns_deadline_exceeded() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let ctx = RequestContext::background().with_timeout(Duration::from_millis(50));

    let err = client.get_project(&ctx, "p-1").await.unwrap_err();

    assert!(matches!(err, ClientError::DeadlineExceeded { .. }));
    assert_eq!(err.error_category(), "deadline_exceeded");
}

#[tokio::test]
async fn given_unreachable_server_when_executed_then_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = crate::Client::new_for_loopback_tests(
        TEST_API_KEY,
        &format!("http://127.0.0.1:{port}"),
        "",
    )
    .unwrap();

    let err = client
        .get_project(&RequestContext::background(), "p-1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport { .. }));
    assert!(err.is_transport());
    assert!(err.status_code().is_none());
    assert!(!err.to_string().contains(TEST_API_KEY));
}
