//! JWT bearer authentication.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};
use domain::BEARER_TOKEN_PREFIX;
use iam_service::domain::Roles;

use crate::state::AppState;

/// Authenticated caller, taken from the token claims.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub roles: Vec<String>,
}

impl CurrentUser {
    pub fn has_role(&self, role: Roles) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}

/// Forbidden unless the caller holds `role`.
pub fn require_role(user: &CurrentUser, role: Roles) -> AppResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        tracing::warn!(user_id = user.id, required = %role, "Access denied");
        Err(AppError::Forbidden)
    }
}

/// Validate the bearer token and inject [`CurrentUser`] into the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.tokens.validate_token(token)?;

    let current_user = CurrentUser {
        id: claims.uid,
        username: claims.sub,
        roles: claims.roles,
    };
    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}
