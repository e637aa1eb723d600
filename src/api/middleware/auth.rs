use crate::AppState;
use crate::api::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Admin gate: a Bearer token whose session row is still live.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = state.auth.validate_session(&token).await?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
