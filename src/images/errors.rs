use axum::http::StatusCode;

use crate::{app::models::api_error::ApiError, whomeai::errors::UpstreamError};

#[derive(Debug)]
pub enum ImagesApiError {
    PromptRequired,
    InvalidResponse,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required".to_string(),
            },
            Self::InvalidResponse => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: UpstreamError::InvalidResponse.to_string(),
            },
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Status { status, message } => ApiError {
                code: status,
                message,
            },
            UpstreamError::InvalidResponse => ImagesApiError::InvalidResponse.value(),
            UpstreamError::Transport(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
        }
    }
}
