//! Webinar repository trait.

use crate::error::Result;
use crate::types::{Webinar, WebinarId};
use std::future::Future;

/// Webinar repository.
pub trait WebinarRepository: Send + Sync {
    /// Get webinar by ID.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Storage query fails
    /// - Webinar not found → `BookingError::WebinarNotFound`
    fn find_by_id(&self, webinar_id: &WebinarId) -> impl Future<Output = Result<Webinar>> + Send;

    /// Create webinar.
    ///
    /// # Errors
    ///
    /// Returns error if storage fails.
    fn create(&self, webinar: &Webinar) -> impl Future<Output = Result<()>> + Send;
}
