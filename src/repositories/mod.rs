//! Порты доступа к данным. Бизнес-слой знает только эти трейты,
//! реализации на Postgres подключаются в `AppState`.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Enrollment, HotelWithRooms, Session, TicketWithType, User};

pub mod hotels;
pub mod sessions;
pub mod tickets;
pub mod users;

pub use hotels::PgHotelRepository;
pub use sessions::PgSessionRepository;
pub use tickets::PgTicketRepository;
pub use users::PgUserRepository;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Первый отель в порядке хранилища, с номерами.
    async fn fetch_first_hotel(&self) -> AppResult<Option<HotelWithRooms>>;

    async fn fetch_hotel_by_id(&self, hotel_id: i32) -> AppResult<Option<HotelWithRooms>>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_enrollment_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>>;

    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> AppResult<Option<TicketWithType>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, user_id: i32, token: &str) -> AppResult<Session>;

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>>;
}
