use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct WhomeAiGenerateImagesResponse {
    pub images: Vec<WhomeAiImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhomeAiImage {
    pub base64: String,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// True when `body.images` exists and is an array.
pub fn has_image_array(body: &Value) -> bool {
    body.get("images").map_or(false, Value::is_array)
}
