pub mod recent_prompt;
pub mod settings;
