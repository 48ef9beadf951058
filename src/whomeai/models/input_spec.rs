use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl InputSpec {
    /// Builds a request body. A zero seed counts as unset and is left out.
    pub fn new(prompt: &str, model: &str, size: &str, n: u32, seed: Option<i64>) -> Self {
        Self {
            prompt: prompt.to_string(),
            model: model.to_string(),
            size: size.to_string(),
            n,
            seed: seed.filter(|seed| *seed != 0),
        }
    }
}
