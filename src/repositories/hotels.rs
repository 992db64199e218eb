use async_trait::async_trait;
use sqlx::PgPool;

use super::HotelRepository;
use crate::error::AppResult;
use crate::models::{Hotel, HotelWithRooms, Room};

#[derive(Clone)]
pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_rooms(&self, hotel: Option<Hotel>) -> AppResult<Option<HotelWithRooms>> {
        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at
             FROM rooms
             WHERE hotel_id = $1
             ORDER BY id"
        )
        .bind(hotel.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn fetch_first_hotel(&self) -> AppResult<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at
             FROM hotels
             ORDER BY id
             LIMIT 1"
        )
        .fetch_optional(&self.pool)
        .await?;

        self.with_rooms(hotel).await
    }

    async fn fetch_hotel_by_id(&self, hotel_id: i32) -> AppResult<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at
             FROM hotels
             WHERE id = $1"
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?;

        self.with_rooms(hotel).await
    }
}
