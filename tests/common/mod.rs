#![allow(dead_code)]

use std::{
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::Response,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tower::ServiceExt;
use websitebio_imagegen::{app::envy::Envy, router, AppState};

pub const UPSTREAM_PATH: &str = "/v1/images/generations";
pub const SERVER_KEY: &str = "sk-server-held";

#[derive(Debug, Clone)]
pub struct Captured {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct Upstream {
    response: Arc<Mutex<(StatusCode, String)>>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Stand-in for the image API: answers every POST with a canned status and
/// body and records what it was sent.
pub struct FakeUpstream {
    pub url: String,
    response: Arc<Mutex<(StatusCode, String)>>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl FakeUpstream {
    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }

    /// Changes the canned answer for subsequent requests.
    pub fn respond_with(&self, status: StatusCode, body: impl Into<String>) {
        *self.response.lock().unwrap() = (status, body.into());
    }
}

pub async fn spawn_upstream(status: StatusCode, body: impl Into<String>) -> FakeUpstream {
    let response = Arc::new(Mutex::new((status, body.into())));
    let captured = Arc::new(Mutex::new(Vec::new()));
    let upstream = Upstream {
        response: response.clone(),
        captured: captured.clone(),
    };

    let app = Router::new()
        .route(UPSTREAM_PATH, post(handle_upstream))
        .with_state(upstream);
    let base = serve(app).await;

    FakeUpstream {
        url: format!("{}{}", base, UPSTREAM_PATH),
        response,
        captured,
    }
}

async fn handle_upstream(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    upstream
        .captured
        .lock()
        .unwrap()
        .push(Captured { authorization, body });

    let (status, body) = upstream.response.lock().unwrap().clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(async move {
        server.await.unwrap();
    });

    format!("http://{}", addr)
}

/// URL on which nothing is listening.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}{}", addr, UPSTREAM_PATH)
}

pub fn proxy_app(upstream_url: &str) -> Router {
    router(AppState::new(Envy {
        whomeai_api_key: SERVER_KEY.to_string(),
        whomeai_api_endpoint: upstream_url.to_string(),
        ..Default::default()
    }))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
