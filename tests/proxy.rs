//! Integration tests for `POST /api/generateImages`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, closed_url, proxy_app, send, spawn_upstream, SERVER_KEY};
use serde_json::json;

const ENDPOINT: &str = "/api/generateImages";

fn two_images() -> String {
    json!({
        "images": [
            { "base64": "AA" },
            { "base64": "BB", "revised_prompt": "a red fox standing in snow" }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn root_answers_ok() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let response = send(proxy_app(&upstream.url), Method::GET, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let response = send(proxy_app(&upstream.url), Method::GET, ENDPOINT, None).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn put_is_method_not_allowed() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let response = send(
        proxy_app(&upstream.url),
        Method::PUT,
        ENDPOINT,
        Some(r#"{"prompt":"a red fox in snow"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn empty_body_is_bad_request() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let response = send(proxy_app(&upstream.url), Method::POST, ENDPOINT, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn missing_prompt_is_bad_request() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;

    for body in [r#"{}"#, r#"{"prompt":""}"#, r#"{"model":"sdxl"}"#] {
        let response = send(proxy_app(&upstream.url), Method::POST, ENDPOINT, Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(body_json(response).await, json!({ "error": "Prompt is required" }));
    }
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn prompt_only_is_forwarded_with_defaults() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let response = send(
        proxy_app(&upstream.url),
        Method::POST,
        ENDPOINT,
        Some(r#"{"prompt":"a red fox in snow"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["images"][1]["base64"], "BB");

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some(format!("Bearer {}", SERVER_KEY).as_str())
    );
    assert_eq!(
        requests[0].body,
        json!({
            "prompt": "a red fox in snow",
            "model": "nano-banana",
            "size": "1024x1024",
            "n": 1
        })
    );
    assert!(requests[0].body.get("seed").is_none());
}

#[tokio::test]
async fn explicit_fields_and_seed_are_forwarded() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let body = json!({
        "prompt": "a red fox in snow",
        "model": "flux-dev",
        "size": "512x512",
        "n": 2,
        "seed": 77
    })
    .to_string();
    let response = send(proxy_app(&upstream.url), Method::POST, ENDPOINT, Some(&body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        upstream.requests()[0].body,
        json!({
            "prompt": "a red fox in snow",
            "model": "flux-dev",
            "size": "512x512",
            "n": 2,
            "seed": 77
        })
    );
}

#[tokio::test]
async fn client_credentials_are_not_forwarded() {
    let upstream = spawn_upstream(StatusCode::OK, two_images()).await;
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri(ENDPOINT)
        .header("content-type", "application/json")
        .header("authorization", "Bearer sk-client")
        .body(axum::body::Body::from(r#"{"prompt":"a red fox in snow"}"#))
        .unwrap();

    let response = tower::ServiceExt::oneshot(proxy_app(&upstream.url), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        upstream.requests()[0].authorization.as_deref(),
        Some(format!("Bearer {}", SERVER_KEY).as_str())
    );
}

#[tokio::test]
async fn upstream_error_status_and_message_are_relayed() {
    let upstream = spawn_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "rate limited" } }).to_string(),
    )
    .await;
    let response = send(
        proxy_app(&upstream.url),
        Method::POST,
        ENDPOINT,
        Some(r#"{"prompt":"a red fox in snow"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(response).await, json!({ "error": "rate limited" }));
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_status_line() {
    let upstream = spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, "upstream is down").await;
    let response = send(
        proxy_app(&upstream.url),
        Method::POST,
        ENDPOINT,
        Some(r#"{"prompt":"a red fox in snow"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "HTTP 503: Service Unavailable" })
    );
}

#[tokio::test]
async fn success_without_image_array_is_internal_error() {
    for body in [
        json!({ "data": [] }).to_string(),
        json!({ "images": "AA" }).to_string(),
        "not json".to_string(),
    ] {
        let upstream = spawn_upstream(StatusCode::OK, body.clone()).await;
        let response = send(
            proxy_app(&upstream.url),
            Method::POST,
            ENDPOINT,
            Some(r#"{"prompt":"a red fox in snow"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "body {}", body);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid response from API: No images returned" })
        );
    }
}

#[tokio::test]
async fn transport_failure_is_internal_error() {
    let response = send(
        proxy_app(&closed_url()),
        Method::POST,
        ENDPOINT,
        Some(r#"{"prompt":"a red fox in snow"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(!message.is_empty());
}
