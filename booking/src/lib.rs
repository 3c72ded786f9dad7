//! # Webinar Booking
//!
//! Seat reservation for webinars: a registered user books a seat, capacity
//! and duplicate bookings are enforced, and the organizer is notified by
//! email.
//!
//! ## Architecture
//!
//! The [`BookSeat`] use case orchestrates four ports defined in
//! [`providers`]:
//!
//! ```text
//! BookSeatRequest → BookSeat → (WebinarRepository, ParticipationRepository,
//!                               UserRepository) → reserve → Mailer
//! ```
//!
//! Storage and delivery technologies stay behind those traits. The
//! [`mocks`] module (feature `test-utils`, on by default) ships in-memory
//! implementations.
//!
//! ## Example
//!
//! ```rust,ignore
//! use webinar_booking::*;
//!
//! let env = BookingEnvironment::new(users, webinars, participations, mailer);
//! let use_case = BookSeat::new(env, BookingConfig::from_env());
//!
//! use_case.execute(BookSeatRequest::new("1", user)).await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod providers;
pub mod types;
pub mod use_cases;

// Mock providers (for testing and local runs)
#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use config::{BookingConfig, NotificationConfig};
pub use environment::BookingEnvironment;
pub use error::{BookingError, Result};
pub use types::{Email, Participation, User, UserId, Webinar, WebinarId};
pub use use_cases::{BookSeat, BookSeatRequest};
