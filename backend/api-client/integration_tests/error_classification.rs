use api_client::{ApiError, ClientError, is_not_found, is_rate_limited, is_unauthorized};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("reading dataset ds-1")]
struct ReadError {
    #[source]
    source: ClientError,
}

fn wrapped(status: u16, body: &str) -> ReadError {
    ReadError {
        source: ApiError::from_response(status, body.as_bytes(), None).into(),
    }
}

/// **VALUE**: Downstream code can classify errors through its own wrappers
/// using only the public API.
#[test]
fn given_wrapped_client_errors_when_classified_then_status_predicates_hold() {
    let not_found = wrapped(404, r#"{"error":"Dataset not found"}"#);
    let limited = wrapped(429, "Too many requests");
    let denied = wrapped(401, "");

    assert!(is_not_found(&not_found));
    assert!(is_rate_limited(&limited));
    assert!(is_unauthorized(&denied));

    assert!(!is_not_found(&limited));
    assert!(!is_rate_limited(&denied));
    assert!(!is_unauthorized(&not_found));
}

#[test]
fn given_api_error_then_fields_are_safe_to_show() {
    let key = "sk-shown-nowhere-123";
    let body = format!(r#"{{"message":"token {key} expired","details":{{"hint":"Bearer {key}"}}}}"#);

    let error = ApiError::from_response(401, body.as_bytes(), Some(key));

    assert_eq!(error.status.as_u16(), 401);
    assert!(!error.message.contains(key));
    assert!(!error.details["hint"].as_str().unwrap().contains(key));
}
