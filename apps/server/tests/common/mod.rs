#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use tempfile::TempDir;
use tower::ServiceExt;

use donorhub_server::{
    api::app_router,
    auth::Claims,
    build_state,
    config::{AuthConfig, Config},
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Builds the full router against a throwaway database. The TempDir must
/// stay alive for the duration of the test.
pub async fn build_test_router() -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        auth: AuthConfig {
            token_secret: TEST_SECRET.to_string(),
        },
        insights_url: None,
        insights_api_key: None,
        rate_limit_per_second: 100,
        rate_limit_burst: 200,
        allowed_origins: Vec::new(),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

/// Issues an access token the way the external session service would.
pub fn issue_token(organization_id: &str, user_id: &str) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        org: organization_id.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn request(
    app: &axum::Router,
    token: Option<&str>,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        // Most endpoints return JSON, but some (e.g. /health) return plain
        // text. Fall back to a JSON string rather than panicking so callers
        // that only inspect the status still work.
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(_) => serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        }
    };
    (status, json)
}
