use reqwest::{header, StatusCode};
use serde_json::Value;
use tracing::Level;

use super::{
    errors::UpstreamError,
    models::input_spec::InputSpec,
    structs::{
        whomeai_error_response::WhomeAiErrorResponse,
        whomeai_generate_images_response::has_image_array,
    },
};

#[derive(Debug, Clone)]
pub struct WhomeAiClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl WhomeAiClient {
    /// Client for the API itself, authenticated with `api_key`.
    pub fn direct(http: reqwest::Client, url: &str, api_key: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
            api_key: Some(api_key.to_string()),
        }
    }

    /// Client for a proxy that attaches the credential on its side.
    pub fn via_proxy(http: reqwest::Client, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
            api_key: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `spec` and returns the response body once it is known to hold an
    /// `images` array.
    pub async fn generate_images(&self, spec: &InputSpec) -> Result<Value, UpstreamError> {
        let mut request = self
            .http
            .post(&self.url)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .json(spec);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        tracing::debug!(url = %self.url, model = %spec.model, n = spec.n, "requesting images");

        let res = match request.send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::event!(Level::ERROR, %e);
                return Err(UpstreamError::Transport(e.to_string()));
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::event!(Level::ERROR, %e);
                return Err(UpstreamError::Transport(e.to_string()));
            }
        };

        if !status.is_success() {
            let message = error_message(status, &text);
            tracing::event!(Level::WARN, %status, %message);
            return Err(UpstreamError::Status { status, message });
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(body) if has_image_array(&body) => Ok(body),
            Ok(_) => Err(UpstreamError::InvalidResponse),
            Err(e) => {
                tracing::event!(Level::ERROR, %e, %text);
                Err(UpstreamError::InvalidResponse)
            }
        }
    }
}

fn error_message(status: StatusCode, text: &str) -> String {
    serde_json::from_str::<WhomeAiErrorResponse>(text)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )
        })
}
