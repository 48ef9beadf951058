use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Non-2xx answer. `message` is the body's error message, or
    /// `HTTP {status}: {reason}` when the body has none.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("Invalid response from API: No images returned")]
    InvalidResponse,
    #[error("{0}")]
    Transport(String),
}
