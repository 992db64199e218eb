#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{NaiveDateTime, Utc};
use fake::{
    faker::{
        company::en::CompanyName, internet::en::SafeEmail, lorem::en::Word, name::en::Name,
    },
    Fake,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use event_hotels::{
    auth::issue_token,
    config::{AppConfig, Config, DatabaseConfig, JwtConfig},
    error::AppResult,
    models::{
        Enrollment, Hotel, HotelWithRooms, Room, Session, Ticket, TicketStatus, TicketType,
        TicketWithType, User,
    },
    repositories::{HotelRepository, SessionRepository, TicketRepository, UserRepository},
    AppState,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<Session>,
    enrollments: Vec<Enrollment>,
    ticket_types: Vec<TicketType>,
    tickets: Vec<Ticket>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Хранилище в памяти, реализующее все порты приложения.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn create_user(&self, password: &str) -> User {
        let mut t = self.tables.lock().unwrap();
        let user = User {
            id: next_id(t.users.len()),
            email: SafeEmail().fake(),
            password: bcrypt::hash(password, 4).unwrap(),
            created_at: now(),
            updated_at: now(),
        };
        t.users.push(user.clone());
        user
    }

    pub fn create_enrollment(&self, user: &User) -> Enrollment {
        let mut t = self.tables.lock().unwrap();
        let enrollment = Enrollment {
            id: next_id(t.enrollments.len()),
            name: Name().fake(),
            user_id: user.id,
            created_at: now(),
            updated_at: now(),
        };
        t.enrollments.push(enrollment.clone());
        enrollment
    }

    pub fn create_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> TicketType {
        let mut t = self.tables.lock().unwrap();
        let ticket_type = TicketType {
            id: next_id(t.ticket_types.len()),
            name: Word().fake(),
            price: (100..1000).fake(),
            is_remote,
            includes_hotel,
            created_at: now(),
            updated_at: now(),
        };
        t.ticket_types.push(ticket_type.clone());
        ticket_type
    }

    pub fn create_ticket(
        &self,
        enrollment_id: i32,
        ticket_type_id: i32,
        status: TicketStatus,
    ) -> Ticket {
        let mut t = self.tables.lock().unwrap();
        let ticket = Ticket {
            id: next_id(t.tickets.len()),
            ticket_type_id,
            enrollment_id,
            status,
            created_at: now(),
            updated_at: now(),
        };
        t.tickets.push(ticket.clone());
        ticket
    }

    pub fn create_hotel(&self) -> Hotel {
        let mut t = self.tables.lock().unwrap();
        let hotel = Hotel {
            id: next_id(t.hotels.len()),
            name: CompanyName().fake(),
            image: format!("https://images.example.com/{}.png", Word().fake::<String>()),
            created_at: now(),
            updated_at: now(),
        };
        t.hotels.push(hotel.clone());
        hotel
    }

    pub fn create_room(&self, hotel_id: i32, capacity: i32) -> Room {
        let mut t = self.tables.lock().unwrap();
        let room = Room {
            id: next_id(t.rooms.len()),
            name: Word().fake(),
            capacity,
            hotel_id,
            created_at: now(),
            updated_at: now(),
        };
        t.rooms.push(room.clone());
        room
    }

    fn hotel_with_rooms(t: &Tables, hotel: &Hotel) -> HotelWithRooms {
        let rooms = t.rooms.iter().filter(|r| r.hotel_id == hotel.id).cloned().collect();
        HotelWithRooms::new(hotel.clone(), rooms)
    }
}

#[async_trait]
impl HotelRepository for MemoryStore {
    async fn fetch_first_hotel(&self) -> AppResult<Option<HotelWithRooms>> {
        let t = self.tables.lock().unwrap();
        Ok(t.hotels.first().map(|h| Self::hotel_with_rooms(&t, h)))
    }

    async fn fetch_hotel_by_id(&self, hotel_id: i32) -> AppResult<Option<HotelWithRooms>> {
        let t = self.tables.lock().unwrap();
        Ok(t.hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .map(|h| Self::hotel_with_rooms(&t, h)))
    }
}

#[async_trait]
impl TicketRepository for MemoryStore {
    async fn find_enrollment_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>> {
        let t = self.tables.lock().unwrap();
        Ok(t.enrollments.iter().find(|e| e.user_id == user_id).cloned())
    }

    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> AppResult<Option<TicketWithType>> {
        let t = self.tables.lock().unwrap();
        let Some(ticket) = t.tickets.iter().find(|tk| tk.enrollment_id == enrollment_id) else {
            return Ok(None);
        };
        Ok(t.ticket_types
            .iter()
            .find(|tt| tt.id == ticket.ticket_type_id)
            .map(|tt| TicketWithType {
                ticket: ticket.clone(),
                ticket_type: tt.clone(),
            }))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, user_id: i32, token: &str) -> AppResult<Session> {
        let mut t = self.tables.lock().unwrap();
        let session = Session {
            id: next_id(t.sessions.len()),
            user_id,
            token: token.to_string(),
            created_at: now(),
            updated_at: now(),
        };
        t.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        let t = self.tables.lock().unwrap();
        Ok(t.sessions.iter().find(|s| s.token == token).cloned())
    }
}

pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            environment: "test".into(),
            rust_log: "event_hotels=debug".into(),
        },
        database: DatabaseConfig { url: "postgres://unused".into(), pool_size: 1 },
        jwt: JwtConfig { secret: "test-secret".into(), expires_in_hours: 1 },
    }
}

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub router: Router,
    pub config: Config,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let config = test_config();
        let state = Arc::new(AppState {
            config: config.clone(),
            hotels: store.clone(),
            tickets: store.clone(),
            users: store.clone(),
            sessions: store.clone(),
        });
        Self { router: event_hotels::app(state), store, config }
    }

    /// Выпускает токен и сессию так же, как это делает вход.
    pub async fn token_for(&self, user: &User) -> String {
        let token = issue_token(user.id, &self.config.jwt).unwrap();
        self.store.create(user.id, &token).await.unwrap();
        token
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }
}

pub fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}
