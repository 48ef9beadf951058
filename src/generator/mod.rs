//! Request orchestration: turns a prompt plus settings into a generation,
//! tracks the UI-visible state machine and projects it into a view model.

pub mod enums;
pub mod errors;
pub mod models;
pub mod orchestrator;
pub mod state;
pub mod view;

pub static MIN_PROMPT_LENGTH: usize = 5;
