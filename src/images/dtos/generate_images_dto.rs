use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    images::{DEFAULT_MODEL, DEFAULT_NUMBER, DEFAULT_SIZE},
    whomeai::models::input_spec::InputSpec,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerateImagesDto {
    #[validate(required, length(min = 1))]
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub size: Option<String>,
    pub n: Option<u32>,
    pub seed: Option<i64>,
}

impl GenerateImagesDto {
    /// Request body for the upstream API with defaults applied to every
    /// unset or empty field.
    pub fn to_input_spec(&self) -> InputSpec {
        InputSpec::new(
            self.prompt.as_deref().unwrap_or_default(),
            non_empty(&self.model).unwrap_or(DEFAULT_MODEL),
            non_empty(&self.size).unwrap_or(DEFAULT_SIZE),
            self.n.filter(|n| *n > 0).unwrap_or(DEFAULT_NUMBER),
            self.seed,
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
