//! Shared building blocks for the API client workspace.
//!
//! Nothing in here performs I/O. These are the small leaf types that both the
//! resource models and the HTTP client lean on:
//!
//! - [`ErrorLocation`]: call-site capture attached to every error variant
//! - [`HttpStatusCode`]: status classification without string parsing
//! - [`RedactedApiKey`]: the bearer credential, never printed or serialized
//! - [`redact_secrets`]: scrubs credential material out of free text

pub mod error;
pub mod http_status;
pub mod redacted_key;
pub mod redaction;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
pub use redaction::{REDACTION_MARKER, redact_secrets};
