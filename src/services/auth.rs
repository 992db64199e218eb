use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::auth::issue_token;
use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::repositories::{SessionRepository, UserRepository};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SignInUser {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResult {
    pub user: SignInUser,
    pub token: String,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            users: state.users.clone(),
            sessions: state.sessions.clone(),
            jwt: state.config.jwt.clone(),
        }
    }

    /// Проверяет пароль, выпускает JWT и сохраняет сессию с этим токеном.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignInResult> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.verify_password(password) {
            return Err(AppError::InvalidCredentials);
        }

        let token = issue_token(user.id, &self.jwt)?;
        self.sessions.create(user.id, &token).await?;
        info!(user_id = user.id, "user signed in");

        Ok(SignInResult {
            user: SignInUser { id: user.id, email: user.email },
            token,
        })
    }
}
