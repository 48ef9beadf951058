use serde::Deserialize;

/// Error body from either the API (`{"error": {"message": ".."}}`) or the
/// proxy (`{"error": ".."}`).
#[derive(Debug, Deserialize)]
pub struct WhomeAiErrorResponse {
    pub error: WhomeAiErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WhomeAiErrorDetail {
    Object { message: Option<String> },
    Text(String),
}

impl WhomeAiErrorResponse {
    pub fn message(&self) -> Option<&str> {
        let message = match &self.error {
            WhomeAiErrorDetail::Object { message } => message.as_deref(),
            WhomeAiErrorDetail::Text(text) => Some(text.as_str()),
        };

        message.filter(|message| !message.is_empty())
    }
}
