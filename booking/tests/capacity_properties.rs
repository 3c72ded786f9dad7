//! Property tests for seat capacity and booking outcomes.

#![allow(clippy::expect_used, clippy::unwrap_used)] // Test code can use unwrap/expect

use proptest::prelude::*;
use webinar_booking::{BookSeatRequest, BookingError, User, WebinarId};
use webinar_booking_testing::{BookingHarness, fixtures, properties};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to create runtime")
}

/// Book `user` at webinar `1` with `seats` capacity and `booked` prior attendees.
fn book(seats: u32, booked: usize, user: User) -> (Result<(), BookingError>, usize, usize) {
    let webinar_id = WebinarId::from("1");
    let harness = BookingHarness::builder()
        .webinar(fixtures::webinar(webinar_id.clone(), seats))
        .user(user.clone())
        .participations(fixtures::attendees(&webinar_id, booked))
        .build();

    let result = runtime().block_on(harness.use_case.execute(BookSeatRequest::new(webinar_id, user)));

    (
        result,
        harness.participations.all().unwrap().len(),
        harness.mailer.sent_emails().unwrap().len(),
    )
}

proptest! {
    #[test]
    fn full_webinar_rejects_newcomers(seats in properties::seats(), user in properties::newcomer()) {
        let (result, stored, emails) = book(seats, seats as usize, user);

        prop_assert_eq!(result, Err(BookingError::WebinarNoMoreSeat));
        prop_assert_eq!(stored, seats as usize);
        prop_assert_eq!(emails, 0);
    }

    #[test]
    fn open_webinar_appends_exactly_one(
        (seats, booked) in properties::open_webinar(),
        user in properties::newcomer(),
    ) {
        let (result, stored, emails) = book(seats, booked, user);

        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(stored, booked + 1);
        prop_assert_eq!(emails, 1);
    }

    #[test]
    fn has_available_seat_matches_count(seats in properties::seats(), count in 0usize..128) {
        let webinar = fixtures::webinar("1", seats);
        prop_assert_eq!(webinar.has_available_seat(count), count < seats as usize);
    }
}
