use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::envy::Envy;

pub mod app;
pub mod generator;
pub mod images;
pub mod settings;
pub mod whomeai;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub envy: Arc<Envy>,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            http: reqwest::Client::new(),
            envy: Arc::new(envy),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::OPTIONS]);
    let max_body_bytes = state.envy.max_body_bytes;

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route(
            "/api/generateImages",
            post(images::controller::generate_images)
                .fallback(images::controller::method_not_allowed),
        )
        .with_state(state)
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
