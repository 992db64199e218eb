use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::auth::{AuthService, SignInResult},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/sign-in", post(sign_in))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

// POST /auth/sign-in
async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> AppResult<Json<SignInResult>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = AuthService::from_state(&state)
        .sign_in(&req.email, &req.password)
        .await?;

    Ok(Json(result))
}
