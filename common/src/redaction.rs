//! Credential scrubbing for text that leaves the client.
//!
//! Upstream error bodies have been seen echoing request headers back, so every
//! message built from a response passes through [`redact_secrets`] before it is
//! stored in an error value.

use std::sync::OnceLock;

use regex::Regex;

/// Replacement text for any credential material.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Prefix shared by all API keys issued by the platform.
pub const API_KEY_PREFIX: &str = "sk-";

const AUTHORIZATION_HEADER_PATTERN: &str = r"(?i)authorization\s*:\s*bearer\s+[A-Za-z0-9._~+/=-]+";
const BEARER_TOKEN_PATTERN: &str = r"(?i)\bbearer\s+[A-Za-z0-9._~+/=-]+";
const API_KEY_PATTERN: &str = r"\bsk-[A-Za-z0-9-]+";

static AUTHORIZATION_HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
static BEARER_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static API_KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn authorization_header_regex() -> &'static Regex {
    AUTHORIZATION_HEADER_REGEX
        .get_or_init(|| Regex::new(AUTHORIZATION_HEADER_PATTERN).expect("valid regex pattern"))
}

fn bearer_token_regex() -> &'static Regex {
    BEARER_TOKEN_REGEX.get_or_init(|| Regex::new(BEARER_TOKEN_PATTERN).expect("valid regex pattern"))
}

fn api_key_regex() -> &'static Regex {
    API_KEY_REGEX.get_or_init(|| Regex::new(API_KEY_PATTERN).expect("valid regex pattern"))
}

/// Remove credential material from `message`.
///
/// Passes, in order:
/// 1. every literal occurrence of `credential` (when given and not blank)
/// 2. `Authorization: Bearer <token>` header echoes
/// 3. bare `Bearer <token>` pairs
/// 4. anything shaped like an API key (`sk-` followed by alphanumerics/hyphens)
pub fn redact_secrets(message: &str, credential: Option<&str>) -> String {
    let mut scrubbed = match credential {
        Some(secret) if !secret.trim().is_empty() => message.replace(secret, REDACTION_MARKER),
        _ => message.to_string(),
    };

    let header_replacement = format!("Authorization: Bearer {REDACTION_MARKER}");
    scrubbed = authorization_header_regex()
        .replace_all(&scrubbed, header_replacement.as_str())
        .into_owned();

    let bearer_replacement = format!("Bearer {REDACTION_MARKER}");
    scrubbed = bearer_token_regex()
        .replace_all(&scrubbed, bearer_replacement.as_str())
        .into_owned();

    api_key_regex()
        .replace_all(&scrubbed, REDACTION_MARKER)
        .into_owned()
}
