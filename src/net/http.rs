//! HTTP client factory over `gloo-net`.
//!
//! Client-side (csr): real HTTP calls with a fixed base URL, a fixed
//! request timeout enforced via an `AbortController`, default JSON headers,
//! and the bearer credential attached whenever one is stored.
//! Native (non-csr): stubs returning `ApiError::Network`, so the API layer
//! and the pages compile in the test configuration.
//!
//! Failures are logged with status and body, then classified into
//! [`ApiError`](crate::net::error::ApiError) and returned unchanged to the
//! caller. No retry, no central 401 handling.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;

/// Fallback API origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Fixed client-wide request timeout.
#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// The configured API origin, supplied at build time.
pub fn base_url() -> &'static str {
    option_env!("BLOODBANK_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Join the base URL and an endpoint path with exactly one slash.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// `Authorization` header value for a stored credential.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `Authorization` header for the request, present iff a credential is
/// stored. An empty credential never reaches here; `session::get` filters
/// empty values.
pub fn auth_header(token: Option<&str>) -> Option<String> {
    token.map(bearer)
}

/// GET a JSON resource, with optional query parameters.
#[cfg(feature = "csr")]
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let url = join_url(base_url(), path);
    let (_guard, signal) = timeout_signal()?;

    let mut builder = gloo_net::http::Request::get(&url)
        .abort_signal(Some(&signal))
        .header("Accept", "application/json")
        .query(query.iter().map(|(key, value)| (*key, value.as_str())));
    if let Some(value) = auth_header(crate::session::get().as_deref()) {
        builder = builder.header("Authorization", &value);
    }

    let response = builder.send().await.map_err(|err| {
        leptos::logging::warn!("GET {url} failed: {err}");
        ApiError::Network
    })?;
    parse_response(&url, response).await
}

/// POST a JSON body and parse a JSON response.
#[cfg(feature = "csr")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = join_url(base_url(), path);
    let (_guard, signal) = timeout_signal()?;

    let mut builder = gloo_net::http::Request::post(&url)
        .abort_signal(Some(&signal))
        .header("Accept", "application/json");
    if let Some(value) = auth_header(crate::session::get().as_deref()) {
        builder = builder.header("Authorization", &value);
    }

    // `.json` sets Content-Type and serializes the body.
    let request = builder.json(body).map_err(|err| {
        leptos::logging::warn!("POST {url}: could not encode body: {err}");
        ApiError::Network
    })?;
    let response = request.send().await.map_err(|err| {
        leptos::logging::warn!("POST {url} failed: {err}");
        ApiError::Network
    })?;
    parse_response(&url, response).await
}

/// Abort signal that fires after the client-wide timeout. The returned guard
/// must stay alive until the request resolves; dropping it cancels the timer.
#[cfg(feature = "csr")]
fn timeout_signal() -> Result<(gloo_timers::callback::Timeout, web_sys::AbortSignal), ApiError> {
    let controller = web_sys::AbortController::new().map_err(|_| ApiError::Network)?;
    let signal = controller.signal();
    let timeout = gloo_timers::callback::Timeout::new(REQUEST_TIMEOUT_MS, move || {
        controller.abort();
    });
    Ok((timeout, signal))
}

#[cfg(feature = "csr")]
async fn parse_response<T: DeserializeOwned>(
    url: &str,
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if response.ok() {
        response.json::<T>().await.map_err(|err| {
            leptos::logging::warn!("{url}: could not decode response: {err}");
            ApiError::Server { status }
        })
    } else {
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        leptos::logging::warn!("{url}: status {status}, body {body}");
        Err(crate::net::error::classify(status, &body))
    }
}

#[cfg(not(feature = "csr"))]
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let _ = (path, query);
    Err(ApiError::Network)
}

#[cfg(not(feature = "csr"))]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let _ = (path, body);
    Err(ApiError::Network)
}
