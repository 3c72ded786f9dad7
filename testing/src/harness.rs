//! Pre-wired booking use case over the in-memory providers.
//!
//! The harness keeps handles on every mock so tests can seed data before a
//! booking and inspect the stores afterwards. Mocks share their storage
//! between clones, so the handles see everything the use case writes.

use webinar_booking::mocks::{
    MockMailer, MockParticipationRepository, MockUserRepository, MockWebinarRepository,
};
use webinar_booking::{BookSeat, BookingConfig, BookingEnvironment, Participation, User, Webinar};

/// [`BookSeat`] specialized to the mock providers.
pub type MockBookSeat =
    BookSeat<MockUserRepository, MockWebinarRepository, MockParticipationRepository, MockMailer>;

/// A booking use case together with handles on its mocks.
#[derive(Debug, Clone)]
pub struct BookingHarness {
    /// User repository handle.
    pub users: MockUserRepository,
    /// Webinar repository handle.
    pub webinars: MockWebinarRepository,
    /// Participation repository handle.
    pub participations: MockParticipationRepository,
    /// Mailer handle.
    pub mailer: MockMailer,
    /// The use case under test.
    pub use_case: MockBookSeat,
}

impl BookingHarness {
    /// Start building a harness.
    #[must_use]
    pub fn builder() -> BookingHarnessBuilder {
        BookingHarnessBuilder::default()
    }
}

/// Builder for [`BookingHarness`].
#[derive(Debug, Default)]
pub struct BookingHarnessBuilder {
    webinars: Vec<Webinar>,
    users: Vec<User>,
    participations: Vec<Participation>,
    mailer: Option<MockMailer>,
    config: BookingConfig,
}

impl BookingHarnessBuilder {
    /// Seed one webinar.
    #[must_use]
    pub fn webinar(mut self, webinar: Webinar) -> Self {
        self.webinars.push(webinar);
        self
    }

    /// Seed several webinars.
    #[must_use]
    pub fn webinars(mut self, webinars: impl IntoIterator<Item = Webinar>) -> Self {
        self.webinars.extend(webinars);
        self
    }

    /// Seed one user.
    #[must_use]
    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Seed several users.
    #[must_use]
    pub fn users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        self.users.extend(users);
        self
    }

    /// Seed one participation.
    #[must_use]
    pub fn participation(mut self, participation: Participation) -> Self {
        self.participations.push(participation);
        self
    }

    /// Seed several participations.
    #[must_use]
    pub fn participations(
        mut self,
        participations: impl IntoIterator<Item = Participation>,
    ) -> Self {
        self.participations.extend(participations);
        self
    }

    /// Replace the default (succeeding) mailer.
    #[must_use]
    pub fn mailer(mut self, mailer: MockMailer) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Replace the default configuration.
    #[must_use]
    pub fn config(mut self, config: BookingConfig) -> Self {
        self.config = config;
        self
    }

    /// Wire the mocks into a use case.
    #[must_use]
    pub fn build(self) -> BookingHarness {
        let users = MockUserRepository::with_users(self.users);
        let webinars = MockWebinarRepository::with_webinars(self.webinars);
        let participations = MockParticipationRepository::with_participations(self.participations);
        let mailer = self.mailer.unwrap_or_default();

        let use_case = BookSeat::new(
            BookingEnvironment::new(
                users.clone(),
                webinars.clone(),
                participations.clone(),
                mailer.clone(),
            ),
            self.config,
        );

        BookingHarness {
            users,
            webinars,
            participations,
            mailer,
            use_case,
        }
    }
}
