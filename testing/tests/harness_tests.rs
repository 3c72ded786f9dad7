//! Tests for the booking harness

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use webinar_booking::mocks::MockMailer;
use webinar_booking::providers::{ParticipationRepository, UserRepository, WebinarRepository};
use webinar_booking::{BookSeatRequest, BookingConfig, BookingError, Participation, UserId, WebinarId};
use webinar_booking_testing::{BookingHarness, fixtures};

#[tokio::test]
async fn test_builder_seeds_every_store() {
    let harness = BookingHarness::builder()
        .webinar(fixtures::webinar("1", 3))
        .users([fixtures::alice(), fixtures::organizer()])
        .participation(Participation::new("9", "1"))
        .build();

    assert_eq!(harness.webinars.find_by_id(&WebinarId::from("1")).await.unwrap().seats(), 3);
    assert_eq!(harness.users.user_count().unwrap(), 2);
    assert_eq!(
        harness
            .users
            .find_by_id(&UserId::from(fixtures::ORGANIZER_ID))
            .await
            .unwrap()
            .email,
        "organizer@example.com"
    );
    assert_eq!(
        harness
            .participations
            .find_by_webinar_id(&WebinarId::from("1"))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_handles_observe_use_case_writes() {
    let harness = BookingHarness::builder()
        .webinar(fixtures::webinar("1", 3))
        .user(fixtures::alice())
        .build();

    harness
        .use_case
        .execute(BookSeatRequest::new("1", fixtures::alice()))
        .await
        .unwrap();

    assert_eq!(harness.participations.all().unwrap(), vec![Participation::new("1", "1")]);
    assert_eq!(harness.mailer.sent_emails().unwrap().len(), 1);
}

#[tokio::test]
async fn test_builder_overrides_mailer_and_config() {
    let harness = BookingHarness::builder()
        .webinar(fixtures::webinar("1", 3))
        .user(fixtures::alice())
        .mailer(MockMailer::failing())
        .config(BookingConfig::default().with_organizer_address("ops@example.com"))
        .build();

    let result = harness
        .use_case
        .execute(BookSeatRequest::new("1", fixtures::alice()))
        .await;

    assert!(matches!(result, Err(BookingError::EmailDeliveryFailed(ref message)) if message.contains("ops@example.com")));
    assert_eq!(harness.participations.all().unwrap().len(), 1);
}
