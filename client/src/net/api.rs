//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed registration
//! call degrades into a form banner without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RegisterRequest, RegisterResponse};

/// Registration endpoint path.
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// Failure of an HTTP call before a usable response body was obtained.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("register request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Decode a registration response body.
///
/// Field errors may arrive with a non-2xx status, so the body is decoded first
/// and the status only matters when the body is not a registration response.
#[cfg(any(test, feature = "hydrate"))]
fn decode_register_body(status: u16, body: &str) -> Result<RegisterResponse, ApiError> {
    match serde_json::from_str::<RegisterResponse>(body) {
        Ok(resp) => Ok(resp),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Register a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, or the response is neither
/// a registration body nor a success status.
pub async fn register(request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        log::debug!("register response: status={status}");
        decode_register_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
