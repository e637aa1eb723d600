use crate::AppState;
use crate::api::error::AppError;
use crate::utils::auth::Claims;
use axum::{Extension, Json, extract::State, http::StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub username: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "admin"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let session = state
        .auth
        .login(payload.username.trim(), &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token: session.token,
        username: session.username,
        expires_at: session.expires_at,
    }))
}

#[utoipa::path(
    post,
    path = "/admin/logout",
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, AppError> {
    state.auth.close_session(&claims.jti).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/session",
    responses(
        (status = 200, description = "Current admin session", body = SessionResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn current_session(Extension(claims): Extension<Claims>) -> Json<SessionResponse> {
    Json(SessionResponse {
        expires_at: Utc.timestamp_opt(claims.exp as i64, 0).single(),
        username: claims.sub,
    })
}
