//! Seat booking use case.
//!
//! Books one seat at a webinar for a registered user and notifies the
//! organizer.
//!
//! # Flow
//!
//! 1. Load the webinar (`WebinarNotFound` if absent)
//! 2. Load its participations
//! 3. Check capacity (`WebinarNoMoreSeat`)
//! 4. Re-load the user from the repository (`UserNotFound`)
//! 5. Reject a second booking of the same pair (`WebinarUserAlreadyParticipate`)
//! 6. Persist the participation through the atomic `reserve`
//! 7. Email the organizer
//!
//! Every step runs once, in order, and the first failure aborts the flow.
//! A mailer failure after step 6 leaves the participation in place.

use crate::config::{BookingConfig, NotificationConfig};
use crate::constants::confirmation;
use crate::environment::BookingEnvironment;
use crate::error::{BookingError, Result};
use crate::providers::{Mailer, ParticipationRepository, UserRepository, WebinarRepository};
use crate::types::{Email, Participation, User, Webinar, WebinarId};
use tracing::{debug, info, warn};

/// Input of [`BookSeat::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSeatRequest {
    /// Webinar to book.
    pub webinar_id: WebinarId,

    /// Booking user, as known by the caller.
    pub user: User,
}

impl BookSeatRequest {
    /// Create a new booking request.
    #[must_use]
    pub fn new(webinar_id: impl Into<WebinarId>, user: User) -> Self {
        Self {
            webinar_id: webinar_id.into(),
            user,
        }
    }
}

/// Seat booking use case.
///
/// # Example
///
/// ```ignore
/// let use_case = BookSeat::new(env, BookingConfig::default());
/// use_case.execute(BookSeatRequest::new("1", user)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookSeat<U, W, P, M>
where
    U: UserRepository,
    W: WebinarRepository,
    P: ParticipationRepository,
    M: Mailer,
{
    env: BookingEnvironment<U, W, P, M>,
    notification: NotificationConfig,
}

impl<U, W, P, M> BookSeat<U, W, P, M>
where
    U: UserRepository,
    W: WebinarRepository,
    P: ParticipationRepository,
    M: Mailer,
{
    /// Create the use case over `env`.
    #[must_use]
    pub fn new(env: BookingEnvironment<U, W, P, M>, config: BookingConfig) -> Self {
        Self {
            env,
            notification: config.notification,
        }
    }

    /// Dependencies the use case runs against.
    #[must_use]
    pub const fn environment(&self) -> &BookingEnvironment<U, W, P, M> {
        &self.env
    }

    /// Book a seat.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The webinar does not exist → `BookingError::WebinarNotFound`
    /// - Every seat is taken → `BookingError::WebinarNoMoreSeat`
    /// - The user does not exist → `BookingError::UserNotFound`
    /// - The user already booked this webinar → `BookingError::WebinarUserAlreadyParticipate`
    /// - A repository or the mailer fails
    #[tracing::instrument(
        name = "book_seat",
        skip_all,
        fields(webinar_id = %request.webinar_id, user_id = %request.user.id)
    )]
    pub async fn execute(&self, request: BookSeatRequest) -> Result<()> {
        let BookSeatRequest { webinar_id, user } = request;

        let webinar = self.env.webinars.find_by_id(&webinar_id).await?;
        let participants = self
            .env
            .participations
            .find_by_webinar_id(&webinar_id)
            .await?;

        if !webinar.has_available_seat(participants.len()) {
            warn!(seats = webinar.seats(), "Booking rejected: no seat left");
            return Err(BookingError::WebinarNoMoreSeat);
        }

        let verified = self.env.users.find_by_id(&user.id).await?;

        if participants
            .iter()
            .any(|participant| participant.user_id == verified.id)
        {
            warn!("Booking rejected: user already participates");
            return Err(BookingError::WebinarUserAlreadyParticipate);
        }

        let participation = Participation::new(verified.id, webinar.id.clone());
        self.env
            .participations
            .reserve(&participation, webinar.seats())
            .await?;
        info!(
            remaining_seats = webinar.remaining_seats(participants.len() + 1),
            "Seat booked"
        );

        let email = Email {
            to: self.organizer_address(&webinar).await?,
            subject: confirmation::subject(&webinar.title),
            body: confirmation::body(&user.email, &webinar.title),
        };
        self.env.mailer.send(&email).await?;
        debug!(to = %email.to, "Organizer notified");

        Ok(())
    }

    /// Recipient of the confirmation for `webinar`.
    async fn organizer_address(&self, webinar: &Webinar) -> Result<String> {
        if !self.notification.resolve_organizer {
            return Ok(self.notification.organizer_address.clone());
        }

        match self.env.users.find_by_id(&webinar.organizer_id).await {
            Ok(organizer) => Ok(organizer.email),
            Err(BookingError::UserNotFound { user_id }) => {
                warn!(
                    organizer_id = %user_id,
                    fallback = %self.notification.organizer_address,
                    "Organizer not found, using fallback address"
                );
                Ok(self.notification.organizer_address.clone())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::{
        MockMailer, MockParticipationRepository, MockUserRepository, MockWebinarRepository,
    };
    use chrono::{TimeZone, Utc};

    type TestBookSeat =
        BookSeat<MockUserRepository, MockWebinarRepository, MockParticipationRepository, MockMailer>;

    fn webinar(seats: u32) -> Webinar {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Webinar::new("1", "organizer", "Rust", start, start, seats)
    }

    fn alice() -> User {
        User::new("1", "alice@gmail.com", "123")
    }

    fn use_case(users: Vec<User>, config: BookingConfig) -> TestBookSeat {
        BookSeat::new(
            BookingEnvironment::new(
                MockUserRepository::with_users(users),
                MockWebinarRepository::with_webinars([webinar(2)]),
                MockParticipationRepository::new(),
                MockMailer::new(),
            ),
            config,
        )
    }

    #[tokio::test]
    async fn test_execute_books_and_notifies() {
        let use_case = use_case(vec![alice()], BookingConfig::default());

        use_case.execute(BookSeatRequest::new("1", alice())).await.unwrap();

        let env = use_case.environment();
        assert_eq!(env.participations.all().unwrap(), vec![Participation::new("1", "1")]);
        let emails = env.mailer.sent_emails().unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].subject, confirmation::subject("Rust"));
    }

    #[tokio::test]
    async fn test_organizer_address_uses_fixed_address_by_default() {
        let organizer = User::new("organizer", "owner@example.com", "pw");
        let use_case = use_case(vec![organizer], BookingConfig::default());

        let address = use_case.organizer_address(&webinar(2)).await.unwrap();

        assert_eq!(address, "organisateur@gmail.com");
    }

    #[tokio::test]
    async fn test_organizer_address_resolves_organizer() {
        let organizer = User::new("organizer", "owner@example.com", "pw");
        let use_case = use_case(
            vec![organizer],
            BookingConfig::default().with_resolve_organizer(true),
        );

        let address = use_case.organizer_address(&webinar(2)).await.unwrap();

        assert_eq!(address, "owner@example.com");
    }

    #[tokio::test]
    async fn test_organizer_address_falls_back_when_missing() {
        let use_case = use_case(
            Vec::new(),
            BookingConfig::default()
                .with_organizer_address("fallback@example.com")
                .with_resolve_organizer(true),
        );

        let address = use_case.organizer_address(&webinar(2)).await.unwrap();

        assert_eq!(address, "fallback@example.com");
    }
}
