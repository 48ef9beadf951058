pub mod generated_image;
pub mod generation_request;
