//! Booking use cases.

pub mod book_seat;

pub use book_seat::{BookSeat, BookSeatRequest};
