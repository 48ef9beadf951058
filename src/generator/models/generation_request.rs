use serde::Serialize;
use validator::Validate;

use crate::{
    app::util::validation,
    generator::{errors::GenerateError, MIN_PROMPT_LENGTH},
    settings::models::settings::Settings,
    whomeai::models::input_spec::InputSpec,
};

/// A validated prompt plus the settings it is generated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub count: u32,
    pub seed: Option<i64>,
}

impl GenerationRequest {
    pub fn new(prompt: &str, settings: &Settings) -> Result<Self, GenerateError> {
        let prompt = prompt.trim();

        if prompt.is_empty() {
            return Err(GenerateError::Validation(
                "Please enter a description for your image.".to_string(),
            ));
        }

        if prompt.chars().count() < MIN_PROMPT_LENGTH {
            return Err(GenerateError::Validation(format!(
                "Please provide a more detailed description (at least {} characters).",
                MIN_PROMPT_LENGTH
            )));
        }

        if let Err(e) = settings.validate() {
            return Err(GenerateError::Validation(validation::first_message(&e)));
        }

        Ok(Self {
            prompt: prompt.to_string(),
            model: settings.model.to_string(),
            size: settings.size.to_string(),
            count: settings.quantity,
            seed: settings.seed.filter(|seed| *seed != 0),
        })
    }

    pub fn to_input_spec(&self) -> InputSpec {
        InputSpec::new(&self.prompt, &self.model, &self.size, self.count, self.seed)
    }
}
