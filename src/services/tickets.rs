use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::TicketWithType;
use crate::repositories::TicketRepository;

/// Поиск билета пользователя: сначала регистрация, затем билет по ней.
#[derive(Clone)]
pub struct TicketsService {
    tickets: Arc<dyn TicketRepository>,
}

impl TicketsService {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }

    pub async fn get_ticket_by_user_id(&self, user_id: i32) -> AppResult<TicketWithType> {
        let enrollment = self
            .tickets
            .find_enrollment_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id, "no enrollment");
                AppError::NotFound
            })?;

        self.tickets
            .find_ticket_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| {
                debug!(user_id, enrollment_id = enrollment.id, "no ticket");
                AppError::NotFound
            })
    }
}
