//! Typed HTTPS client for the Braintrust REST API.
//!
//! Every resource operation goes through one request pipeline that validates
//! the origin and path, attaches auth and identification headers, honours the
//! caller's [`RequestContext`], and turns any status >= 400 into a redacted
//! [`ApiError`].

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod query;

mod resources;

#[cfg(test)]
mod tests;

pub use client::{Client, DEFAULT_API_URL, NO_BODY};
pub use config::ClientConfig;
pub use context::RequestContext;
pub use error::{
    ApiError, ClientError, ConfigError, find_api_error, is_not_found, is_rate_limited,
    is_unauthorized,
};
pub use query::{QueryParams, ToQuery};

pub use models;
pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
