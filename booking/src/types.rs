//! Domain types for webinar seat booking.
//!
//! This module contains the identifiers and entities the booking use case
//! works with. Entities are plain immutable records; they are owned and
//! persisted by the repositories in [`crate::providers`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a user.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a `UserId` from an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random `UserId`.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a webinar.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebinarId(String);

impl WebinarId {
    /// Create a `WebinarId` from an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random `WebinarId`.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WebinarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WebinarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A registered user.
///
/// Users are created by registration, which lives outside this crate.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,

    /// Email address.
    pub email: String,

    /// Password as stored by registration.
    pub password: String,
}

impl User {
    /// Create a new user record.
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A scheduled webinar with a fixed seat capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    /// Webinar ID.
    pub id: WebinarId,

    /// User who organizes the webinar.
    pub organizer_id: UserId,

    /// Display title, used in confirmation emails.
    pub title: String,

    /// Start of the session.
    pub start_date: DateTime<Utc>,

    /// End of the session.
    pub end_date: DateTime<Utc>,

    /// Total capacity. Fixed at creation.
    seats: u32,
}

impl Webinar {
    /// Create a new webinar.
    #[must_use]
    pub fn new(
        id: impl Into<WebinarId>,
        organizer_id: impl Into<UserId>,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        seats: u32,
    ) -> Self {
        Self {
            id: id.into(),
            organizer_id: organizer_id.into(),
            title: title.into(),
            start_date,
            end_date,
            seats,
        }
    }

    /// Total seat capacity.
    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.seats
    }

    /// Returns `true` if another participant fits next to
    /// `current_participant_count` existing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use webinar_booking::types::Webinar;
    /// # use chrono::Utc;
    /// let webinar = Webinar::new("1", "1", "Rust 101", Utc::now(), Utc::now(), 2);
    /// assert!(webinar.has_available_seat(1));
    /// assert!(!webinar.has_available_seat(2));
    /// ```
    #[must_use]
    pub fn has_available_seat(&self, current_participant_count: usize) -> bool {
        current_participant_count < self.seats as usize
    }

    /// Seats left after `current_participant_count` bookings.
    #[must_use]
    pub fn remaining_seats(&self, current_participant_count: usize) -> usize {
        (self.seats as usize).saturating_sub(current_participant_count)
    }
}

/// The record of a user having booked a seat at a webinar.
///
/// Identified by the `(user_id, webinar_id)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participation {
    /// Booking user.
    pub user_id: UserId,

    /// Booked webinar.
    pub webinar_id: WebinarId,
}

impl Participation {
    /// Create a new participation.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, webinar_id: impl Into<WebinarId>) -> Self {
        Self {
            user_id: user_id.into(),
            webinar_id: webinar_id.into(),
        }
    }
}

/// An outgoing email, as handed to a [`crate::providers::Mailer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Recipient address.
    pub to: String,

    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub body: String,
}
