use reqwest::StatusCode;
use thiserror::Error;

use crate::{settings::errors::PersistenceError, whomeai::errors::UpstreamError};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Validation(String),
    #[error("API Error: {message}")]
    Api { status: StatusCode, message: String },
    #[error("Invalid response from API: No images returned")]
    InvalidResponse,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Persistence(#[from] PersistenceError),
    #[error("Failed to save image: {0}")]
    Download(String),
}

impl GenerateError {
    /// API and transport failures can be retried as-is; bad input cannot.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::InvalidResponse | Self::Transport(_)
        )
    }
}

impl From<UpstreamError> for GenerateError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Status { status, message } => Self::Api { status, message },
            UpstreamError::InvalidResponse => Self::InvalidResponse,
            UpstreamError::Transport(message) => Self::Transport(message),
        }
    }
}
