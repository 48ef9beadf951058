use axum::{extract::State, Json};
use serde_json::Value;
use validator::Validate;

use crate::{
    app::{
        errors::DefaultApiError,
        models::{api_error::ApiError, json_from_request::JsonFromRequest},
    },
    AppState,
};

use super::{dtos::generate_images_dto::GenerateImagesDto, errors::ImagesApiError, service};

pub async fn generate_images(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImagesDto>,
) -> Result<Json<Value>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_images(&dto, &state).await {
            Ok(body) => Ok(Json(body)),
            Err(e) => Err(e),
        },
        Err(_) => Err(ImagesApiError::PromptRequired.value()),
    }
}

pub async fn method_not_allowed() -> ApiError {
    DefaultApiError::MethodNotAllowed.value()
}
