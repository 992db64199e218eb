pub mod auth;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use repositories::{
    HotelRepository, PgHotelRepository, PgSessionRepository, PgTicketRepository,
    PgUserRepository, SessionRepository, TicketRepository, UserRepository,
};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub hotels: Arc<dyn HotelRepository>,
    pub tickets: Arc<dyn TicketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
}

impl AppState {
    /// Подключает Postgres-реализации всех репозиториев к одному пулу.
    pub fn new(config: config::Config, db: &database::Database) -> Arc<Self> {
        Arc::new(Self {
            config,
            hotels: Arc::new(PgHotelRepository::new(db.pool.clone())),
            tickets: Arc::new(PgTicketRepository::new(db.pool.clone())),
            users: Arc::new(PgUserRepository::new(db.pool.clone())),
            sessions: Arc::new(PgSessionRepository::new(db.pool.clone())),
        })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
