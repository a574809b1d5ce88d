//! HTTP surface: one router per domain module, composed under `/api/v1`
//! behind the auth middleware.

mod campaigns;
mod donations;
mod donors;
mod insights;
mod reports;
mod segments;
mod workflows;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::config::Config;
use crate::main_lib::AppState;

async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = if config.allowed_origins.is_empty() {
        vec![
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ]
    } else {
        config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                    None
                }
            })
            .collect()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(donors::router())
        .merge(donations::router())
        .merge(campaigns::router())
        .merge(segments::router())
        .merge(workflows::router())
        .merge(reports::router())
        .merge(insights::router())
        .layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
