//! HTTP status code classification for API error handling.

use std::fmt;

use http::StatusCode;

const UNKNOWN_STATUS: &str = "Unknown Status";

/// HTTP status code carried by a structured API error.
///
/// Stored as the raw integer so classification never depends on the
/// message text returned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const UNAUTHORIZED: Self = Self(401);
    pub const NOT_FOUND: Self = Self(404);
    pub const TOO_MANY_REQUESTS: Self = Self(429);

    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Anything at or above 400 is reported as a remote error.
    pub fn is_error(self) -> bool {
        self.0 >= 400
    }

    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.0)
    }

    pub fn is_not_found(self) -> bool {
        self == Self::NOT_FOUND
    }

    pub fn is_rate_limited(self) -> bool {
        self == Self::TOO_MANY_REQUESTS
    }

    pub fn is_unauthorized(self) -> bool {
        self == Self::UNAUTHORIZED
    }

    /// Canonical reason phrase, used when the server sends an empty error body.
    pub fn reason_phrase(self) -> &'static str {
        StatusCode::from_u16(self.0)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or(UNKNOWN_STATUS)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
