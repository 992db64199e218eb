pub mod auth;
pub mod hotels;
pub mod tickets;
