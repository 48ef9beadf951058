use serde::{Deserialize, Serialize};

use crate::app::util::time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPrompt {
    pub prompt: String,
    /// Unix milliseconds.
    pub timestamp: u64,
}

impl RecentPrompt {
    pub fn now(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            timestamp: time::current_time_in_millis(),
        }
    }
}
