use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    MethodNotAllowed,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MethodNotAllowed => ApiError {
                code: StatusCode::METHOD_NOT_ALLOWED,
                message: "Method not allowed".to_string(),
            },
        }
    }
}
