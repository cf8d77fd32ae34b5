//! Registration, login and current-user endpoints.

use axum::extract::State;

use super::{created, ok, require, ApiResult, AppJson};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};
use crate::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    require(&request.username, "Username is required")?;
    require(&request.email, "Email is required")?;
    require(&request.password, "Password is required")?;

    let user = state
        .auth
        .register(&request.username, &request.email, &request.password)
        .await?;
    created(RegisterResponse { user_id: user.id })
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let token = state.auth.login(&request.email, &request.password).await?;
    ok(LoginResponse { token })
}

/// GET /api/me - Profile of the token holder.
pub async fn current_user(State(state): State<AppState>, user: AuthUser) -> ApiResult<UserProfile> {
    match state.auth.get_user(&user.user_id).await {
        Some(profile) => ok(profile),
        None => Err(AppError::NotFound(format!("User {} not found", user.user_id))),
    }
}
