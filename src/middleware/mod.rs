use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::sync::Arc;

use crate::{auth::verify_token, error::AppError, AppState};

/// Аутентифицированный пользователь: валидный Bearer JWT и живая сессия с этим токеном.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
}

// Bearer Auth extractor
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // Получаем заголовок Authorization
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = bearer_token(auth_header).ok_or(AppError::Unauthorized)?;

        let claims = verify_token(token, &state.config.jwt)?;

        // Токен должен принадлежать существующей сессии
        let session = state
            .sessions
            .find_by_token(token)
            .await
            .map_err(|e| {
                tracing::error!("session lookup failed: {:?}", e);
                AppError::Unauthorized
            })?
            .ok_or(AppError::Unauthorized)?;

        if session.user_id != claims.user_id {
            return Err(AppError::Unauthorized);
        }

        Ok(AuthUser { user_id: claims.user_id })
    }
}

fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
