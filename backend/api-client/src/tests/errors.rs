// Classification of API errors and the predicates that walk error chains.

use crate::error::{ApiError, ClientError, find_api_error, is_not_found, is_rate_limited, is_unauthorized};

use models::ResourceKind;

use serde_json::json;
use thiserror::Error;

const KEY: &str = "sk-live-abcdef123456";

/// Wrapper the way a resource lifecycle layer adds context to client errors.
#[derive(Debug, Error)]
#[error("reading resource state failed")]
struct LifecycleError {
    #[source]
    source: ClientError,
}

#[derive(Debug, Error)]
#[error("plan failed")]
struct OuterError {
    #[source]
    source: LifecycleError,
}

fn api_error(status: u16) -> ClientError {
    ClientError::Api(ApiError::from_response(status, b"{\"error\":\"nope\"}", Some(KEY)))
}

/// **VALUE**: Predicates keep working after callers wrap the error.
///
/// **WHY THIS MATTERS**: Callers routinely add context around client errors;
/// a "not found" that stops being recognised once wrapped turns a deleted
/// resource into a hard failure.
///
/// **BUG THIS CATCHES**: Predicates that only downcast the top-level error.
#[test]
fn given_wrapped_api_errors_when_classified_then_predicates_see_through_wrapping() {
    // GIVEN: Each status wrapped twice
    let wrap = |status| OuterError {
        source: LifecycleError {
            source: api_error(status),
        },
    };

    // WHEN / THEN: Each predicate matches exactly its own status
    assert!(is_not_found(&wrap(404)));
    assert!(!is_rate_limited(&wrap(404)));
    assert!(!is_unauthorized(&wrap(404)));

    assert!(is_rate_limited(&wrap(429)));
    assert!(!is_not_found(&wrap(429)));

    assert!(is_unauthorized(&wrap(401)));
    assert!(!is_not_found(&wrap(401)));

    assert!(!is_not_found(&wrap(500)));
    assert!(!is_rate_limited(&wrap(500)));
    assert!(!is_unauthorized(&wrap(500)));
}

#[test]
fn given_bare_api_error_when_classified_then_predicates_match() {
    let error = ApiError::from_response(404, b"", None);

    assert!(is_not_found(&error));
    assert_eq!(find_api_error(&error), Some(&error));
}

#[test]
fn given_non_api_errors_when_classified_then_predicates_are_false() {
    let errors = [
        ClientError::cancelled(),
        ClientError::deadline_exceeded(),
        ClientError::empty_identifier(ResourceKind::Dataset),
        ClientError::invalid_path("/x/..", "dot segment"),
    ];

    for error in &errors {
        assert!(!is_not_found(error));
        assert!(!is_rate_limited(error));
        assert!(!is_unauthorized(error));
        assert!(find_api_error(error).is_none());
    }

    let io_error = std::io::Error::other("disk full");
    assert!(!is_not_found(&io_error));
}

#[test]
fn given_json_body_with_only_details_when_classified_then_raw_text_is_message() {
    let body = br#"{"details":{"field":"name"}}"#;

    let error = ApiError::from_response(422, body, None);

    assert_eq!(error.message, String::from_utf8_lossy(body));
    assert_eq!(error.details.get("field"), Some(&json!("name")));
}

#[test]
fn given_empty_timeout_body_when_classified_then_canonical_reason_is_message() {
    let error = ApiError::from_response(408, b"", None);

    assert_eq!(error.message, "Request Timeout");
}

#[test]
fn given_blank_error_field_when_classified_then_message_field_is_used() {
    let error = ApiError::from_response(400, br#"{"error":"  ","message":"bad input"}"#, None);

    assert_eq!(error.message, "bad input");
}

#[test]
fn given_whitespace_body_when_classified_then_reason_phrase_is_used() {
    let error = ApiError::from_response(503, b"  \n", None);

    assert_eq!(error.message, "Service Unavailable");
}

#[test]
fn given_nested_details_when_classified_then_every_string_is_redacted() {
    let body = json!({
        "error": "denied",
        "details": {"attempts": [{"auth": format!("Bearer {KEY}")}], "count": 2}
    })
    .to_string();

    let error = ApiError::from_response(403, body.as_bytes(), Some(KEY));

    let rendered = serde_json::to_string(&error.details).unwrap();
    assert!(!rendered.contains(KEY));
    assert!(rendered.contains("[REDACTED]"));
    assert_eq!(error.details.get("count"), Some(&json!(2)));
}

#[test]
fn given_api_error_when_displayed_then_includes_status_and_message() {
    let error = ApiError::from_response(404, br#"{"error":"Dataset not found"}"#, None);

    assert_eq!(error.to_string(), "API Error (status 404): Dataset not found");
}

/// **VALUE**: Locally raised errors say where they were raised.
#[test]
fn given_empty_identifier_error_when_formatted_then_names_resource_and_location() {
    let error = ClientError::empty_identifier(ResourceKind::EnvVar);

    let message = error.to_string();

    assert!(message.contains("Empty Identifier Error"));
    assert!(message.contains("environment variable ID cannot be empty"));
    assert!(message.contains("errors.rs"));
}

#[test]
fn given_each_error_kind_when_categorized_then_category_is_stable() {
    assert_eq!(api_error(404).error_category(), "client_error");
    assert_eq!(api_error(503).error_category(), "server_error");
    assert_eq!(ClientError::cancelled().error_category(), "cancelled");
    assert_eq!(
        ClientError::invalid_base_url("no host").error_category(),
        "invalid_base_url"
    );
    assert_eq!(
        ClientError::invalid_credential("blank").error_category(),
        "invalid_credential"
    );

    assert_eq!(api_error(600).error_category(), "unexpected_status");

    assert!(ClientError::invalid_credential("blank").is_validation());
    assert!(!api_error(404).is_validation());
    assert!(!api_error(404).is_transport());
}
