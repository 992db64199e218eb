use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Ошибки бизнес-слоя и хранилища. Обработчики не ловят их по имени,
/// а отдают как есть: статус выбирается исчерпывающим `match`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Билет не даёт права на отель (не оплачен, удалённый или без отеля).
    #[error("payment required")]
    PaymentRequired,

    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("email or password are incorrect")]
    InvalidCredentials,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Unknown(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::Database(_) | AppError::Unknown(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Database(e) => tracing::error!("database error: {:?}", e),
            AppError::Unknown(msg) => tracing::error!("unexpected error: {}", msg),
            other => tracing::debug!(status = status.as_u16(), "request rejected: {}", other),
        }
        // Тело ответа всегда пустое
        status.into_response()
    }
}
