//! Studio API Client
//!
//! `fetch` wrappers for the backend REST endpoints, organized by resource.

mod appointments;
mod cases;
mod designers;
mod services;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use studio_core::form::SubmitFailure;
use studio_core::models::ApiErrorBody;
use thiserror::Error;

pub use appointments::*;
pub use cases::*;
pub use designers::*;
pub use services::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl From<ApiError> for SubmitFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } => SubmitFailure::Rejected(message),
            ApiError::Decode(_) => SubmitFailure::Rejected(None),
            ApiError::Network(_) | ApiError::Encode(_) => SubmitFailure::Network,
        }
    }
}

// ========================
// Request Helpers
// ========================

/// GET `url` and decode a JSON body. Non-2xx is an error.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {url}");
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST `body` as JSON. The success body is not read.
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("POST {url}");
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(())
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    // Error bodies are `{ "error": "..." }` when the backend produced them
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    ApiError::Status { status, message }
}
