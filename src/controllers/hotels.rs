use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::AuthUser,
    models::HotelWithRooms,
    services::hotels::HotelsService,
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/{hotel_id}", get(get_hotel))
}

// GET /hotels
async fn list_hotels(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Response> {
    let hotel = HotelsService::from_state(&state)
        .get_hotels(user.user_id)
        .await?;

    // Отелей нет: 200 с пустым телом
    Ok(match hotel {
        Some(hotel) => Json(hotel).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

// GET /hotels/{hotel_id}
async fn get_hotel(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(hotel_id): Path<String>,
) -> AppResult<Json<HotelWithRooms>> {
    let hotel = HotelsService::from_state(&state)
        .get_hotel_by_raw_id(&hotel_id, user.user_id)
        .await?;

    Ok(Json(hotel))
}
