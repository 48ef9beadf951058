pub mod generation_phase;
pub mod image_model;
pub mod image_size;
