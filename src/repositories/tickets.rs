use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use super::TicketRepository;
use crate::error::AppResult;
use crate::models::{Enrollment, Ticket, TicketStatus, TicketType, TicketWithType};

#[derive(Clone)]
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Плоская строка JOIN tickets + ticket_types
#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    ticket_type_id: i32,
    enrollment_id: i32,
    status: TicketStatus,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    type_name: String,
    type_price: i32,
    is_remote: bool,
    includes_hotel: bool,
    type_created_at: NaiveDateTime,
    type_updated_at: NaiveDateTime,
}

impl From<TicketRow> for TicketWithType {
    fn from(row: TicketRow) -> Self {
        TicketWithType {
            ticket: Ticket {
                id: row.id,
                ticket_type_id: row.ticket_type_id,
                enrollment_id: row.enrollment_id,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
        }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn find_enrollment_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT id, name, user_id, created_at, updated_at
             FROM enrollments
             WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(enrollment)
    }

    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> AppResult<Option<TicketWithType>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, t.ticket_type_id, t.enrollment_id, t.status,
                   t.created_at, t.updated_at,
                   tt.name AS type_name, tt.price AS type_price,
                   tt.is_remote, tt.includes_hotel,
                   tt.created_at AS type_created_at, tt.updated_at AS type_updated_at
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TicketWithType::from))
    }
}
