//! Webinar Booking Demo
//!
//! Runs the seat booking flow against the in-memory repositories and the
//! console mailer, showing:
//! - Successful bookings with organizer notification
//! - Duplicate booking rejection
//! - Capacity exhaustion
//! - Unknown webinar lookup
//!
//! # Usage
//!
//! ```bash
//! # Mail the organizer's own address instead of the fixed one
//! BOOKING_RESOLVE_ORGANIZER=true cargo run --bin demo
//! ```

use anyhow::Context;
use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webinar_booking::mocks::{MockParticipationRepository, MockUserRepository, MockWebinarRepository};
use webinar_booking::providers::{ConsoleMailer, ParticipationRepository, WebinarRepository};
use webinar_booking::{BookSeat, BookSeatRequest, BookingConfig, BookingEnvironment, User, Webinar, WebinarId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,webinar_booking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BookingConfig::from_env();
    tracing::info!(
        organizer_address = %config.notification.organizer_address,
        resolve_organizer = config.notification.resolve_organizer,
        "Configuration loaded"
    );

    println!("\n🎙️  ============================================");
    println!("   Webinar Booking - Live Demo");
    println!("============================================\n");

    let organizer = User::new("bob", "bob@example.com", "secret");
    let alice = User::new("alice", "alice@gmail.com", "123");
    let carol = User::new("carol", "carol@example.com", "456");
    let dave = User::new("dave", "dave@example.com", "789");

    let users = MockUserRepository::with_users([
        organizer.clone(),
        alice.clone(),
        carol.clone(),
        dave.clone(),
    ]);
    let webinars = MockWebinarRepository::new();
    let participations = MockParticipationRepository::new();

    let start = Utc::now() + Duration::days(7);
    let webinar = Webinar::new(
        WebinarId::generate(),
        organizer.id.clone(),
        "Idiomatic Rust",
        start,
        start + Duration::hours(1),
        2,
    );
    webinars
        .create(&webinar)
        .await
        .context("failed to create demo webinar")?;

    println!("📋 Webinar: {} ({} seats)\n", webinar.title, webinar.seats());

    let use_case = BookSeat::new(
        BookingEnvironment::new(users, webinars, participations, ConsoleMailer::new()),
        config,
    );

    let attempts = [
        ("Alice books a seat", webinar.id.clone(), alice.clone()),
        ("Alice books again", webinar.id.clone(), alice),
        ("Carol books the last seat", webinar.id.clone(), carol),
        ("Dave arrives too late", webinar.id.clone(), dave.clone()),
        ("Dave tries an unknown webinar", WebinarId::from("unknown"), dave),
    ];

    for (step, (label, webinar_id, user)) in attempts.into_iter().enumerate() {
        println!("{}. {label}", step + 1);
        match use_case.execute(BookSeatRequest::new(webinar_id, user)).await {
            Ok(()) => println!("   ✓ booked\n"),
            Err(e) => println!("   ✗ {e}\n"),
        }
    }

    let booked = use_case
        .environment()
        .participations
        .find_by_webinar_id(&webinar.id)
        .await
        .context("failed to list participations")?;
    println!("🎟️  {} of {} seats booked", booked.len(), webinar.seats());

    Ok(())
}
