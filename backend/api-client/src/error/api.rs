//! Structured API error and the classification of raw error responses.

use common::{HttpStatusCode, redact_secrets};

use std::fmt;

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Normalized error for any response with status >= 400.
///
/// `message` and every string inside `details` have been through
/// [`redact_secrets`], so all three fields can be shown to an end user as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: HttpStatusCode,
    pub message: String,
    pub details: Map<String, Value>,
}

/// Shape of the JSON error bodies the API returns.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Map<String, Value>>,
}

impl ApiError {
    /// Build the error for a failed response.
    ///
    /// `error` wins over `message` when the body is JSON; anything else is
    /// taken verbatim as text. An empty body falls back to the reason phrase.
    /// Redaction always runs, including on text from JSON fields.
    pub fn from_response(status: u16, body: &[u8], credential: Option<&str>) -> Self {
        let status = HttpStatusCode(status);
        let raw_text = String::from_utf8_lossy(body);

        let (message, mut details) = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => {
                let message = non_empty(parsed.error)
                    .or_else(|| non_empty(parsed.message))
                    .unwrap_or_else(|| raw_text.to_string());
                (message, parsed.details.unwrap_or_default())
            }
            Err(_) => (raw_text.to_string(), Map::new()),
        };

        let message = if message.trim().is_empty() {
            status.reason_phrase().to_string()
        } else {
            message
        };

        for value in details.values_mut() {
            redact_value(value, credential);
        }

        let error = Self {
            status,
            message: redact_secrets(&message, credential),
            details,
        };

        debug!("API error classified: status={} message={}", error.status, error.message);
        error
    }

    pub fn is_not_found(&self) -> bool {
        self.status.is_not_found()
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status.is_rate_limited()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status.is_unauthorized()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Error (status {}): {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn redact_value(value: &mut Value, credential: Option<&str>) {
    match value {
        Value::String(text) => *text = redact_secrets(text, credential),
        Value::Array(items) => items.iter_mut().for_each(|item| redact_value(item, credential)),
        Value::Object(map) => map.values_mut().for_each(|item| redact_value(item, credential)),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
