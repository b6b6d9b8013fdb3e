//! Error handling for the sensor API module

use crate::snapshot::ShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was JSON but not the `{ sensor, nutrients }` shape.
    #[error("Invalid response: {0}")]
    InvalidShape(#[from] ShapeError),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// True for failures that happened before a response body could be judged.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Reqwest(_) | ApiError::Http { .. })
    }
}
