pub mod whomeai_error_response;
pub mod whomeai_generate_images_response;
