pub mod hotel;
pub mod ticket;
pub mod user;

pub use hotel::{Hotel, HotelWithRooms, Room};
pub use ticket::{Enrollment, Ticket, TicketStatus, TicketType, TicketWithType};
pub use user::{Session, User};
