//! Booking environment.
//!
//! This module defines the environment type for dependency injection
//! in the booking use case.

use crate::providers::{Mailer, ParticipationRepository, UserRepository, WebinarRepository};

/// Booking environment.
///
/// Contains all external dependencies needed by the booking use case.
///
/// # Type Parameters
///
/// - `U`: User repository
/// - `W`: Webinar repository
/// - `P`: Participation repository
/// - `M`: Mailer
#[derive(Clone, Debug)]
pub struct BookingEnvironment<U, W, P, M>
where
    U: UserRepository,
    W: WebinarRepository,
    P: ParticipationRepository,
    M: Mailer,
{
    /// User repository.
    pub users: U,

    /// Webinar repository.
    pub webinars: W,

    /// Participation repository.
    pub participations: P,

    /// Mailer for organizer notifications.
    pub mailer: M,
}

impl<U, W, P, M> BookingEnvironment<U, W, P, M>
where
    U: UserRepository,
    W: WebinarRepository,
    P: ParticipationRepository,
    M: Mailer,
{
    /// Create a new booking environment.
    #[must_use]
    pub const fn new(users: U, webinars: W, participations: P, mailer: M) -> Self {
        Self {
            users,
            webinars,
            participations,
            mailer,
        }
    }
}
