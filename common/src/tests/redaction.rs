// Unit tests for the credential scrubbing pass applied to every API error message.

use crate::redaction::{REDACTION_MARKER, redact_secrets};

const KEY: &str = "sk-Tz9qLm4XbW2-aPk7";

/// **VALUE**: The literal credential never survives, whatever surrounds it.
///
/// **BUG THIS CATCHES**: Any body that echoes the key verbatim (with or without the
/// `Bearer ` prefix, with or without a full header line) leaking into an error message.
#[test]
fn given_body_echoing_credential_when_redacted_then_key_is_gone() {
    let bodies = [
        format!("invalid key {KEY}"),
        format!("header was Bearer {KEY} and it failed"),
        format!("Authorization: Bearer {KEY}"),
        format!("{{\"headers\":{{\"authorization\":\"Bearer {KEY}\"}}}}"),
        format!("{KEY}{KEY}"),
    ];

    for body in &bodies {
        let scrubbed = redact_secrets(body, Some(KEY));
        assert!(!scrubbed.contains(KEY), "leaked in: {scrubbed}");
        assert!(scrubbed.contains(REDACTION_MARKER));
    }
}

#[test]
fn given_authorization_header_echo_when_redacted_then_header_form_is_kept() {
    let scrubbed = redact_secrets("request had Authorization: Bearer abc.def-ghi", None);
    assert_eq!(scrubbed, "request had Authorization: Bearer [REDACTED]");
}

#[test]
fn given_bearer_token_without_key_prefix_when_redacted_then_token_is_replaced() {
    let scrubbed = redact_secrets("rejected bearer eyJhbGciOi.JIUzI1NiJ9", None);
    assert_eq!(scrubbed, "rejected Bearer [REDACTED]");
}

/// **VALUE**: Key-shaped runs are scrubbed even when the caller does not know the key,
/// e.g. a server echoing some other user's key.
#[test]
fn given_foreign_key_shaped_token_when_redacted_then_replaced_with_marker() {
    let scrubbed = redact_secrets("key sk-other-123 is revoked", Some(KEY));
    assert_eq!(scrubbed, "key [REDACTED] is revoked");
}

#[test]
fn given_words_containing_key_prefix_when_redacted_then_left_alone() {
    let message = "task-42 could not be found";
    assert_eq!(redact_secrets(message, None), message);
}

#[test]
fn given_blank_credential_when_redacted_then_message_is_not_mangled() {
    assert_eq!(redact_secrets("Dataset not found", Some("")), "Dataset not found");
    assert_eq!(redact_secrets("Dataset not found", Some("   ")), "Dataset not found");
}

#[test]
fn given_credential_without_key_shape_when_redacted_then_literal_is_still_removed() {
    let scrubbed = redact_secrets("token opaque_value_99 rejected", Some("opaque_value_99"));
    assert_eq!(scrubbed, "token [REDACTED] rejected");
}
