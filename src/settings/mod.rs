//! Last-used generation parameters and the recent prompt log, kept in a
//! key-value store the way a browser keeps them in local storage.

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub static SETTINGS_KEY: &str = "websitebio-ai-settings";
pub static RECENT_PROMPTS_KEY: &str = "websitebio-recent-prompts";
pub static RECENT_PROMPTS_LIMIT: usize = 10;
