//! Mock participation repository for testing.

use super::lock_poisoned;
use crate::error::{BookingError, Result};
use crate::providers::ParticipationRepository;
use crate::types::{Participation, WebinarId};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock participation repository.
///
/// Keeps participations in insertion order. [`reserve`] runs its checks and
/// the insert under a single lock acquisition.
///
/// [`reserve`]: ParticipationRepository::reserve
#[derive(Debug, Clone, Default)]
pub struct MockParticipationRepository {
    participations: Arc<Mutex<Vec<Participation>>>,
}

impl MockParticipationRepository {
    /// Create a new, empty mock participation repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock participation repository seeded with `participations`.
    #[must_use]
    pub fn with_participations(participations: impl IntoIterator<Item = Participation>) -> Self {
        Self {
            participations: Arc::new(Mutex::new(participations.into_iter().collect())),
        }
    }

    /// Snapshot of every stored participation, in insertion order (for testing).
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn all(&self) -> Result<Vec<Participation>> {
        Ok(self.participations.lock().map_err(|_| lock_poisoned())?.clone())
    }
}

impl ParticipationRepository for MockParticipationRepository {
    fn find_by_webinar_id(
        &self,
        webinar_id: &WebinarId,
    ) -> impl Future<Output = Result<Vec<Participation>>> + Send {
        let participations = Arc::clone(&self.participations);
        let webinar_id = webinar_id.clone();

        async move {
            Ok(participations
                .lock()
                .map_err(|_| lock_poisoned())?
                .iter()
                .filter(|participation| participation.webinar_id == webinar_id)
                .cloned()
                .collect())
        }
    }

    fn save(&self, participation: &Participation) -> impl Future<Output = Result<()>> + Send {
        let participations = Arc::clone(&self.participations);
        let participation = participation.clone();

        async move {
            participations
                .lock()
                .map_err(|_| lock_poisoned())?
                .push(participation);
            Ok(())
        }
    }

    fn reserve(
        &self,
        participation: &Participation,
        capacity: u32,
    ) -> impl Future<Output = Result<()>> + Send {
        let participations = Arc::clone(&self.participations);
        let participation = participation.clone();

        async move {
            let mut guard = participations.lock().map_err(|_| lock_poisoned())?;

            let booked: Vec<&Participation> = guard
                .iter()
                .filter(|existing| existing.webinar_id == participation.webinar_id)
                .collect();

            // Same precedence as the booking flow: capacity before uniqueness.
            if booked.len() >= capacity as usize {
                return Err(BookingError::WebinarNoMoreSeat);
            }
            if booked.iter().any(|existing| existing.user_id == participation.user_id) {
                return Err(BookingError::WebinarUserAlreadyParticipate);
            }

            guard.push(participation);
            Ok(())
        }
    }
}
