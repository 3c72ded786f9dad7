//! Booking providers.
//!
//! This module defines traits for all external dependencies used by the
//! booking use case. These traits enable dependency injection and make the
//! booking logic testable.
//!
//! # Architecture
//!
//! Providers are **interfaces**, not implementations. The use case depends
//! on these traits, and the application provides concrete implementations.
//!
//! ```text
//!                 ┌──────────────────┐
//!                 │ BookSeat         │
//!                 │ - Validates      │
//!                 │ - Persists       │
//!                 │ - Notifies       │
//!                 └────────┬─────────┘
//!        ┌─────────────┬───┴─────────┬──────────────┐
//!        ▼             ▼             ▼              ▼
//! ┌────────────┐ ┌────────────┐ ┌──────────────┐ ┌────────┐
//! │ Webinar    │ │ User       │ │ Participation│ │ Mailer │
//! │ Repository │ │ Repository │ │ Repository   │ │        │
//! └────────────┘ └────────────┘ └──────────────┘ └────────┘
//! ```
//!
//! This enables:
//! - **Testing**: Use mocks (in-memory, deterministic)
//! - **Production**: Use real services (a database, a mail relay)
//! - **Development**: Use instrumented versions ([`ConsoleMailer`])

pub mod console_email;
pub mod email;
pub mod participation;
pub mod user;
pub mod webinar;

// Re-export provider traits
pub use console_email::ConsoleMailer;
pub use email::Mailer;
pub use participation::ParticipationRepository;
pub use user::UserRepository;
pub use webinar::WebinarRepository;
