use serde_json::Value;

use crate::{
    app::models::api_error::ApiError,
    whomeai::client::WhomeAiClient,
    AppState,
};

use super::dtos::generate_images_dto::GenerateImagesDto;

/// Forwards `dto` to the image API with the server-held credential and
/// relays the body on success.
pub async fn generate_images(dto: &GenerateImagesDto, state: &AppState) -> Result<Value, ApiError> {
    let client = WhomeAiClient::direct(
        state.http.clone(),
        &state.envy.whomeai_api_endpoint,
        &state.envy.whomeai_api_key,
    );
    let spec = dto.to_input_spec();

    match client.generate_images(&spec).await {
        Ok(body) => {
            tracing::info!(model = %spec.model, size = %spec.size, n = spec.n, "images generated");
            Ok(body)
        }
        Err(e) => {
            tracing::error!(%e, "API Error");
            Err(e.into())
        }
    }
}
