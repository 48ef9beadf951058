//! Outbound client for the WhomeAI image generation API.
//!
//! The same client talks to the API directly (with a bearer credential) or
//! to a proxy exposing the same contract (without one).

pub mod client;
pub mod errors;
pub mod models;
pub mod structs;
