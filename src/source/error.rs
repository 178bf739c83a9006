//! Error handling for the data source module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The body was not a JSON array of readings.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl SourceError {
    pub async fn from_response(response: reqwest::Response) -> SourceError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        SourceError::Http { status, message }
    }
}
