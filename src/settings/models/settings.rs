use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::generator::enums::{image_model::ImageModel, image_size::ImageSize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(custom(function = "validate_model"))]
    pub model: String,
    #[validate(custom(function = "validate_size"))]
    pub size: String,
    #[validate(range(min = 1, max = 4, message = "quantity must be between 1 and 4."))]
    pub quantity: u32,
    #[serde(default)]
    pub seed: Option<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: ImageModel::NANO_BANANA.to_string(),
            size: ImageSize::SQUARE_1024.to_string(),
            quantity: 1,
            seed: None,
        }
    }
}

fn validate_model(value: &str) -> Result<(), ValidationError> {
    if !ImageModel::is_valid(value) {
        let mut error = ValidationError::new("validate_model");
        error.message = Some(Cow::from(format!(
            "model must be one of: {}.",
            ImageModel::ALL.join(", ")
        )));
        return Err(error);
    }

    Ok(())
}

fn validate_size(value: &str) -> Result<(), ValidationError> {
    if !ImageSize::is_valid(value) {
        let mut error = ValidationError::new("validate_size");
        error.message = Some(Cow::from(format!(
            "size must be one of: {}.",
            ImageSize::ALL.join(", ")
        )));
        return Err(error);
    }

    Ok(())
}
