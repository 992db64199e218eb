//! Доступ к отелям для держателей билетов.
//!
//! Отель положен только если билет оплачен, тип билета не удалённый
//! и тип билета включает проживание. Условия проверяются в этом порядке,
//! любое невыполненное даёт `PaymentRequired`.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{HotelWithRooms, TicketStatus, TicketWithType};
use crate::repositories::{HotelRepository, TicketRepository};
use crate::services::tickets::TicketsService;
use crate::AppState;

/// Причина отказа в доступе к отелям.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NotPaid,
    Remote,
    HotelNotIncluded,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Denial::NotPaid => "ticket is reserved but not paid",
            Denial::Remote => "ticket type is remote",
            Denial::HotelNotIncluded => "ticket type does not include hotel",
        };
        f.write_str(reason)
    }
}

pub fn check_hotel_access(ticket: &TicketWithType) -> Result<(), Denial> {
    if ticket.ticket.status == TicketStatus::Reserved {
        return Err(Denial::NotPaid);
    }
    if ticket.ticket_type.is_remote {
        return Err(Denial::Remote);
    }
    if !ticket.ticket_type.includes_hotel {
        return Err(Denial::HotelNotIncluded);
    }
    Ok(())
}

#[derive(Clone)]
pub struct HotelsService {
    tickets: TicketsService,
    hotels: Arc<dyn HotelRepository>,
}

impl HotelsService {
    pub fn new(tickets: Arc<dyn TicketRepository>, hotels: Arc<dyn HotelRepository>) -> Self {
        Self { tickets: TicketsService::new(tickets), hotels }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.tickets.clone(), state.hotels.clone())
    }

    async fn ensure_hotel_access(&self, user_id: i32) -> AppResult<()> {
        let ticket = self.tickets.get_ticket_by_user_id(user_id).await?;

        check_hotel_access(&ticket).map_err(|denial| {
            info!(user_id, ticket_id = ticket.ticket.id, "hotel access denied: {}", denial);
            AppError::PaymentRequired
        })
    }

    /// Возвращает один отель (первый в хранилище), а не список.
    /// `None`, если отелей нет вовсе.
    pub async fn get_hotels(&self, user_id: i32) -> AppResult<Option<HotelWithRooms>> {
        self.ensure_hotel_access(user_id).await?;
        self.hotels.fetch_first_hotel().await
    }

    pub async fn get_hotel_by_id(&self, hotel_id: i32, user_id: i32) -> AppResult<HotelWithRooms> {
        self.ensure_hotel_access(user_id).await?;
        self.find_hotel(hotel_id).await
    }

    /// Id отеля в том виде, в каком он пришёл в пути запроса.
    /// Разбирается только после проверки билета: 404/402 важнее 400.
    pub async fn get_hotel_by_raw_id(
        &self,
        raw_id: &str,
        user_id: i32,
    ) -> AppResult<HotelWithRooms> {
        self.ensure_hotel_access(user_id).await?;

        let hotel_id: i32 = raw_id
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid hotel id: {raw_id}")))?;

        self.find_hotel(hotel_id).await
    }

    async fn find_hotel(&self, hotel_id: i32) -> AppResult<HotelWithRooms> {
        self.hotels
            .fetch_hotel_by_id(hotel_id)
            .await?
            .ok_or_else(|| {
                debug!(hotel_id, "hotel not found");
                AppError::NotFound
            })
    }
}
