use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    generator::{errors::GenerateError, models::generation_request::GenerationRequest},
    whomeai::structs::whomeai_generate_images_response::WhomeAiGenerateImagesResponse,
};

/// One image returned by a successful generation. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    pub id: String,
    pub encoded_pixel_data: String,
    pub revised_prompt: String,
    pub source_prompt: String,
    pub model: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl GeneratedImage {
    /// Builds records from an API body, ids derived from `created_at` (unix
    /// millis) and the position in the response.
    pub fn from_response(
        response: WhomeAiGenerateImagesResponse,
        request: &GenerationRequest,
        created_at: u64,
    ) -> Vec<GeneratedImage> {
        response
            .images
            .into_iter()
            .enumerate()
            .map(|(index, image)| GeneratedImage {
                id: format!("img_{}_{}", created_at, index),
                encoded_pixel_data: image.base64,
                revised_prompt: image
                    .revised_prompt
                    .filter(|revised| !revised.is_empty())
                    .unwrap_or_else(|| request.prompt.to_string()),
                source_prompt: request.prompt.to_string(),
                model: request.model.to_string(),
                size: request.size.to_string(),
                seed: request.seed,
            })
            .collect()
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", mime::IMAGE_PNG, self.encoded_pixel_data)
    }

    pub fn file_name(&self) -> String {
        format!("websitebio-generated-{}.png", self.id)
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::decode(&self.encoded_pixel_data)
    }

    /// Writes the decoded PNG into `dir` and returns the file path.
    pub fn download_to(&self, dir: &Path) -> Result<PathBuf, GenerateError> {
        let bytes = self
            .decode()
            .map_err(|e| GenerateError::Download(e.to_string()))?;

        std::fs::create_dir_all(dir).map_err(|e| GenerateError::Download(e.to_string()))?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, bytes).map_err(|e| GenerateError::Download(e.to_string()))?;

        Ok(path)
    }
}
