//! Bearer-token authentication.
//!
//! [`bearer_auth_layer`] gates whole route groups when enabled in config;
//! [`AuthUser`] is an extractor for handlers that always need a caller.

mod jwt;
mod password;
mod service;

pub use jwt::JwtConfig;
pub use service::AuthService;

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("User with this email already exists")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error("Token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Caller identity established from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Auth layer for a route group. `None` lets every request through.
pub async fn bearer_auth_layer(
    auth: Option<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(auth) = auth else {
        return next.run(request).await;
    };

    match authenticate(&auth, request.headers()) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already verified by a gated route group.
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }
        authenticate(&state.auth, &parts.headers)
    }
}

fn authenticate(auth: &AuthService, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;
    let user_id = auth.verify_token(token)?;
    Ok(AuthUser { user_id })
}

/// Extract the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
