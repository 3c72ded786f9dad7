//! Mock provider implementations for testing.
//!
//! This module provides simple, in-memory implementations of all provider traits
//! for use in unit and integration tests, and for running the use case without
//! any infrastructure.

pub mod email;
pub mod participation;
pub mod user;
pub mod webinar;

pub use email::MockMailer;
pub use participation::MockParticipationRepository;
pub use user::MockUserRepository;
pub use webinar::MockWebinarRepository;

use crate::error::BookingError;

/// Error returned when a mock's lock was poisoned by a panicking thread.
fn lock_poisoned() -> BookingError {
    BookingError::Storage("Mutex lock failed".to_string())
}
