//! The single chokepoint every resource operation goes through.

use super::Client;
use super::base_url::validate_origin;
use super::request_path::resolve;

use crate::context::RequestContext;
use crate::error::{ApiError, ClientError};

use common::HttpStatusCode;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::{Instant, sleep_until};

use log::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Typed "no request body" for [`Client::execute`] and [`Client::execute_no_content`].
pub const NO_BODY: Option<&()> = None;

/// Status and fully read body of a successful (< 400) exchange.
struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl Client {
    /// Send one request and decode the JSON response into `T`.
    ///
    /// `path` is root-relative and may carry a query string. `body`, when
    /// given, is sent as JSON with `Content-Type: application/json`.
    ///
    /// # Errors
    /// - [`ClientError::InvalidPath`] / [`ClientError::InvalidBaseUrl`] before any I/O
    /// - [`ClientError::Cancelled`] / [`ClientError::DeadlineExceeded`] from `ctx`
    /// - [`ClientError::Transport`] when no response arrived
    /// - [`ClientError::Api`] for status >= 400
    /// - [`ClientError::Decode`] when a successful body is not valid for `T`
    pub async fn execute<B, T>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(ctx, method, path, body).await?;

        // Empty success bodies decode like JSON null so `Option<T>` callers work.
        let payload: &[u8] = if response.body.is_empty() {
            b"null"
        } else {
            &response.body
        };

        serde_json::from_slice(payload).map_err(|e| ClientError::decode(response.status, &e))
    }

    /// Send one request and discard the response body.
    ///
    /// # Errors
    /// Same as [`Client::execute`], minus decoding.
    pub async fn execute_no_content<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(ctx, method, path, body).await.map(|_| ())
    }

    async fn send<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, ClientError>
    where
        B: Serialize + ?Sized,
    {
        if ctx.is_cancelled() {
            return Err(ClientError::cancelled());
        }
        if ctx.is_expired() {
            return Err(ClientError::deadline_exceeded());
        }

        validate_origin(&self.base_url, self.scheme_policy)?;
        let url = resolve(&self.base_url, path)?;

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ClientError::encode(&e))?;
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes);
        }

        debug!("{method} {path}");

        let exchange = async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok::<_, ClientError>(RawResponse { status, body })
        };

        let response = tokio::select! {
            biased;
            () = ctx.token().cancelled() => return Err(ClientError::cancelled()),
            () = wait_for_deadline(ctx.deadline()) => return Err(ClientError::deadline_exceeded()),
            result = exchange => result?,
        };

        debug!("{method} {path} -> {}", response.status);

        if HttpStatusCode(response.status).is_error() {
            let error =
                ApiError::from_response(response.status, &response.body, Some(self.api_key.expose()));
            return Err(error.into());
        }

        Ok(response)
    }
}

async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
