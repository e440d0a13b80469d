//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`;
//! no TCP listener is involved. The app is built with the same middleware
//! stack as production, minus provider credentials, so the voice pipeline
//! exercises its unconfigured/fallback behavior.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use momentum_api::config::ServerConfig;
use momentum_api::router::build_app_router;
use momentum_api::state::AppState;
use momentum_voice::{ExtractorConfig, TranscriptionClient, TranscriptionConfig, WinExtractor};

/// Fixed user id sent with every authenticated test request.
pub const TEST_USER: &str = "11111111-1111-1111-1111-111111111111";

/// A second user, for isolation checks.
pub const OTHER_USER: &str = "22222222-2222-2222-2222-222222222222";

/// Build a test `ServerConfig` with safe defaults and no provider keys.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        deepgram_api_key: None,
        anthropic_api_key: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let transcription = TranscriptionClient::new(TranscriptionConfig::new(None))
        .expect("transcription client builds without a key");
    let extractor =
        WinExtractor::new(ExtractorConfig::new(None)).expect("extractor builds without a key");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        transcription: Arc::new(transcription),
        extractor: Arc::new(extractor),
    };

    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// GET as [`TEST_USER`].
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Some(TEST_USER), None).await
}

/// GET as a specific user.
pub async fn get_as(app: Router, uri: &str, user: &str) -> Response {
    send(app, Method::GET, uri, Some(user), None).await
}

/// GET with no `x-user-id` header.
pub async fn get_anon(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// POST a JSON body as [`TEST_USER`].
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(TEST_USER), Some(json)).await
}

/// POST with an empty body as [`TEST_USER`].
pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, Some(TEST_USER), None).await
}

/// PATCH a JSON body as [`TEST_USER`].
pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(TEST_USER), Some(json)).await
}

/// PATCH a JSON body as a specific user.
pub async fn patch_json_as(
    app: Router,
    uri: &str,
    user: &str,
    json: serde_json::Value,
) -> Response {
    send(app, Method::PATCH, uri, Some(user), Some(json)).await
}

/// POST a multipart body with a single file field as [`TEST_USER`].
pub async fn post_multipart(
    app: Router,
    uri: &str,
    field_name: &str,
    payload: &[u8],
    mime: &str,
) -> Response {
    let boundary = "momentum-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
             filename=\"clip.webm\"\r\nContent-Type: {mime}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("x-user-id", TEST_USER)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard failure envelope and return its `error` message.
pub async fn assert_error_envelope(response: Response, status: StatusCode, code: &str) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], code);
    json["error"].as_str().unwrap_or_default().to_string()
}
