//! Bearer-token validation.
//!
//! Session issuance, refresh, and password handling are external
//! collaborators. This module only verifies the signed token presented on
//! each request and scopes the request to the organization in its claims;
//! every handler below the middleware can trust `AuthContext`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::main_lib::AppState;

/// Authenticated request context, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub organization_id: String,
    pub user_id: String,
}

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Staff user id
    pub sub: String,
    /// Tenant organization id
    pub org: String,
    pub exp: usize,
}

/// Verifies access tokens against the configured signing secret.
pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthManager {
    pub fn new(token_secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(token_secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Returns the request context for a valid, unexpired token.
    pub fn validate(&self, token: &str) -> Option<AuthContext> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .ok()
            .map(|data| AuthContext {
                organization_id: data.claims.org,
                user_id: data.claims.sub,
            })
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Middleware guarding the API routes. Requests without a valid token get
/// a 401 before any handler runs.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer_token(req.headers()) {
        if let Some(ctx) = state.auth.validate(token) {
            req.extensions_mut().insert(ctx);
            return next.run(req).await;
        }
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "Unauthorized" })),
    )
        .into_response()
}
