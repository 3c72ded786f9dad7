//! # Webinar Booking Testing
//!
//! Testing utilities and helpers for the webinar booking crate.
//!
//! This crate provides:
//! - Entity fixtures with deterministic dates
//! - A booking harness wired to the in-memory providers
//! - A Given-When-Then API for booking scenarios
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use webinar_booking_testing::{BookingHarness, fixtures};
//!
//! #[tokio::test]
//! async fn test_booking() {
//!     let harness = BookingHarness::builder()
//!         .webinar(fixtures::webinar("1", 10))
//!         .user(fixtures::alice())
//!         .build();
//!
//!     harness.use_case.execute(BookSeatRequest::new("1", fixtures::alice())).await?;
//!     assert_eq!(harness.participations.all()?.len(), 1);
//! }
//! ```

use chrono::{DateTime, Utc};

pub mod harness;

/// Entity fixtures.
pub mod fixtures {
    use super::{DateTime, Utc};
    use chrono::Duration;
    use webinar_booking::{Participation, User, UserId, Webinar, WebinarId};

    /// Organizer of every fixture webinar.
    pub const ORGANIZER_ID: &str = "organizer";

    /// Fixed start date for deterministic tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_start_date() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc)
    }

    /// A one-hour webinar titled `Webinar {id}`.
    #[must_use]
    pub fn webinar(id: impl Into<WebinarId>, seats: u32) -> Webinar {
        let id = id.into();
        let title = format!("Webinar {id}");
        titled_webinar(id, title, seats)
    }

    /// A one-hour webinar with an explicit title.
    #[must_use]
    pub fn titled_webinar(id: impl Into<WebinarId>, title: impl Into<String>, seats: u32) -> Webinar {
        let start = test_start_date();
        Webinar::new(id, ORGANIZER_ID, title, start, start + Duration::hours(1), seats)
    }

    /// A user with a throwaway password.
    #[must_use]
    pub fn user(id: impl Into<UserId>, email: impl Into<String>) -> User {
        User::new(id, email, "123")
    }

    /// Alice, user `1`.
    #[must_use]
    pub fn alice() -> User {
        user("1", "alice@gmail.com")
    }

    /// The organizer of the fixture webinars.
    #[must_use]
    pub fn organizer() -> User {
        user(ORGANIZER_ID, "organizer@example.com")
    }

    /// `count` distinct attendees `attendee-0..count` booked at `webinar_id`.
    #[must_use]
    pub fn attendees(webinar_id: &WebinarId, count: usize) -> Vec<Participation> {
        (0..count)
            .map(|i| Participation::new(format!("attendee-{i}"), webinar_id.clone()))
            .collect()
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use webinar_booking::{User, UserId};

    /// Seat capacities small enough to seed fully.
    pub fn seats() -> impl Strategy<Value = u32> {
        0u32..64
    }

    /// `(seats, booked)` pairs with `booked < seats`.
    pub fn open_webinar() -> impl Strategy<Value = (u32, usize)> {
        (1u32..64).prop_flat_map(|seats| (Just(seats), 0..seats as usize))
    }

    /// Users whose ids never collide with fixture attendees.
    pub fn newcomer() -> impl Strategy<Value = User> {
        ("[a-z]{1,12}", "[a-z]{1,8}@[a-z]{1,8}\\.com").prop_map(|(name, email)| {
            User::new(UserId::new(format!("newcomer-{name}")), email, "pw")
        })
    }
}

// Re-export commonly used items
pub use booking_test::BookingTest;
pub use harness::{BookingHarness, MockBookSeat};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_fixed() {
        let start = fixtures::test_start_date();
        assert_eq!(start, fixtures::test_start_date());
        assert_eq!(start.year(), 2025);
    }

    #[test]
    fn test_fixture_webinar_title() {
        let webinar = fixtures::webinar("7", 3);
        assert_eq!(webinar.title, "Webinar 7");
        assert_eq!(webinar.seats(), 3);
        assert!(webinar.end_date > webinar.start_date);
    }

    #[test]
    fn test_attendees_are_distinct() {
        let attendees = fixtures::attendees(&"1".into(), 3);
        assert_eq!(attendees.len(), 3);
        assert_ne!(attendees[0].user_id, attendees[1].user_id);
    }
}
