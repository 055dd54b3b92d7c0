//! Browser executor for `contracts` requests.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Views receive `Result` values and render the error text in place; nothing
//! here retries or panics. Responses are returned exactly as decoded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contracts::{ApiRequest, ContractError};
use serde::de::DeserializeOwned;

/// API origin prefix; empty means same-origin.
pub const API_BASE: &str = match option_env!("ZMEMORY_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Failure of a dashboard API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built from its parameters.
    #[error("invalid request: {0}")]
    Request(String),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{}", status_failed_message(*status, body))]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        Self::Request(err.to_string())
    }
}

#[cfg(any(test, feature = "csr"))]
fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn status_failed_message(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("request failed: {status}")
    } else {
        format!("request failed: {status}: {body}")
    }
}

/// Send `request` and decode its response.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn execute<R: DeserializeOwned>(request: ApiRequest<R>) -> Result<R, ApiError> {
    #[cfg(feature = "csr")]
    {
        use contracts::Method;
        use gloo_net::http::Request;

        let url = api_url(API_BASE, request.path());
        let builder = match request.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .query(request.query().iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let sent = match request.body() {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Request(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| {
            leptos::logging::warn!("{} {} failed: {e}", request.method(), request.path());
            ApiError::Transport(e.to_string())
        })?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            leptos::logging::warn!("{} {} -> {status}", request.method(), request.path());
            return Err(ApiError::Status { status, body });
        }
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Build a request with `build` and send it, folding build errors into [`ApiError`].
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch<R, F>(build: F) -> Result<R, ApiError>
where
    R: DeserializeOwned,
    F: FnOnce() -> Result<ApiRequest<R>, ContractError>,
{
    execute(build()?).await
}
