use crate::error::ApiError;

use common::{ErrorLocation, HttpStatusCode};
use models::ResourceKind;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Every failure a client operation can report.
///
/// Construction and validation variants are raised before any network I/O.
/// `Transport`, `Cancelled` and `DeadlineExceeded` mean no usable response
/// arrived; `Api` means the server answered with status >= 400; `Decode`
/// means it answered successfully with a body we could not read.
#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("Invalid Base URL Error: {message} {location}")]
    InvalidBaseUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Credential Error: {reason} {location}")]
    InvalidCredential {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Invalid Path Error: '{path}': {reason} {location}")]
    InvalidPath {
        path: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Empty Identifier Error: {resource} ID cannot be empty {location}")]
    EmptyIdentifier {
        resource: ResourceKind,
        location: ErrorLocation,
    },

    #[error("Transport Error: no response received: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request cancelled {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Request deadline exceeded {location}")]
    DeadlineExceeded { location: ErrorLocation },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Encode Error: request body could not be serialized: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: status {status} response could not be decoded: {message} {location}")]
    Decode {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn invalid_base_url(message: impl Into<String>) -> Self {
        ClientError::InvalidBaseUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credential(reason: impl Into<String>) -> Self {
        ClientError::InvalidCredential {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_identifier(resource: ResourceKind) -> Self {
        ClientError::EmptyIdentifier {
            resource,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        ClientError::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn deadline_exceeded() -> Self {
        ClientError::DeadlineExceeded {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(status: u16, error: &serde_json::Error) -> Self {
        ClientError::Decode {
            status: HttpStatusCode(status),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(error: &serde_json::Error) -> Self {
        ClientError::Encode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The structured API error, if this is a remote failure.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(api_error) => Some(api_error),
            _ => None,
        }
    }

    /// HTTP status code, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api(api_error) => Some(api_error.status.as_u16()),
            ClientError::Decode { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_not_found)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_rate_limited)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_unauthorized)
    }

    /// Caller or configuration mistakes detected before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidBaseUrl { .. }
                | ClientError::InvalidCredential { .. }
                | ClientError::InvalidPath { .. }
                | ClientError::EmptyIdentifier { .. }
                | ClientError::Encode { .. }
        )
    }

    /// No response was received (network failure, timeout or cancellation).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport { .. }
                | ClientError::Cancelled { .. }
                | ClientError::DeadlineExceeded { .. }
        )
    }

    /// Get error category for metrics and logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            ClientError::InvalidBaseUrl { .. } => "invalid_base_url",
            ClientError::InvalidCredential { .. } => "invalid_credential",
            ClientError::InvalidPath { .. } => "invalid_path",
            ClientError::EmptyIdentifier { .. } => "empty_identifier",
            ClientError::Transport { is_timeout: true, .. } => "timeout",
            ClientError::Transport { is_connection: true, .. } => "connection",
            ClientError::Transport { .. } => "transport",
            ClientError::Cancelled { .. } => "cancelled",
            ClientError::DeadlineExceeded { .. } => "deadline_exceeded",
            ClientError::Api(api_error) if api_error.status.is_client_error() => "client_error",
            ClientError::Api(api_error) if api_error.status.is_server_error() => "server_error",
            ClientError::Api(_) => "unexpected_status",
            ClientError::Encode { .. } => "encode",
            ClientError::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let error = error.without_url();
        ClientError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}
