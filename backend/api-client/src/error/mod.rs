//! Error types for the API client.
//!
//! - [`ClientError`]: everything a client operation can return
//! - [`ApiError`]: the structured, redacted error for any status >= 400
//! - [`ConfigError`]: loading client settings from env or file
//!
//! Callers classify remote failures through [`is_not_found`],
//! [`is_rate_limited`] and [`is_unauthorized`] instead of comparing raw
//! status codes. The predicates walk the `source()` chain, so they keep
//! working after the error has been wrapped in additional context.

pub mod api;
pub mod client;
pub mod config;

pub use api::ApiError;
pub use client::ClientError;
pub use config::ConfigError;

use std::error::Error as StdError;

/// Find the structured API error anywhere in an error chain.
pub fn find_api_error<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ApiError> {
    let mut current = Some(error);

    while let Some(err) = current {
        if let Some(api_error) = err.downcast_ref::<ApiError>() {
            return Some(api_error);
        }
        if let Some(ClientError::Api(api_error)) = err.downcast_ref::<ClientError>() {
            return Some(api_error);
        }
        current = err.source();
    }

    None
}

/// Status 404 anywhere in the chain.
pub fn is_not_found(error: &(dyn StdError + 'static)) -> bool {
    find_api_error(error).is_some_and(|e| e.status.is_not_found())
}

/// Status 429 anywhere in the chain.
pub fn is_rate_limited(error: &(dyn StdError + 'static)) -> bool {
    find_api_error(error).is_some_and(|e| e.status.is_rate_limited())
}

/// Status 401 anywhere in the chain.
pub fn is_unauthorized(error: &(dyn StdError + 'static)) -> bool {
    find_api_error(error).is_some_and(|e| e.status.is_unauthorized())
}
