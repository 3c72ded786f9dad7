//! Participation repository trait.

use crate::error::Result;
use crate::types::{Participation, WebinarId};
use std::future::Future;

/// Participation repository.
///
/// Holds the booking records. Besides plain reads and writes it exposes
/// [`reserve`](Self::reserve), which checks capacity and uniqueness and
/// inserts in one atomic step. Implementations must make `reserve` atomic
/// with respect to every other `reserve` on the same webinar (a transaction,
/// a conditional write, or a per-webinar lock).
pub trait ParticipationRepository: Send + Sync {
    /// List every participation of a webinar.
    ///
    /// # Errors
    ///
    /// Returns error if storage query fails.
    fn find_by_webinar_id(
        &self,
        webinar_id: &WebinarId,
    ) -> impl Future<Output = Result<Vec<Participation>>> + Send;

    /// Store a participation without any check.
    ///
    /// # Errors
    ///
    /// Returns error if storage fails.
    fn save(&self, participation: &Participation) -> impl Future<Output = Result<()>> + Send;

    /// Insert a participation if the pair is not booked yet and fewer than
    /// `capacity` participations exist for the webinar.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The webinar is full → `BookingError::WebinarNoMoreSeat`
    /// - The pair already exists → `BookingError::WebinarUserAlreadyParticipate`
    /// - Storage fails
    fn reserve(
        &self,
        participation: &Participation,
        capacity: u32,
    ) -> impl Future<Output = Result<()>> + Send;
}
