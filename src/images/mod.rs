pub mod controller;
pub mod dtos;
pub mod errors;
pub mod service;

pub static DEFAULT_MODEL: &str = "nano-banana";
pub static DEFAULT_SIZE: &str = "1024x1024";
pub static DEFAULT_NUMBER: u32 = 1;
