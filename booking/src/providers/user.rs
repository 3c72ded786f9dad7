//! User repository trait.

use crate::error::Result;
use crate::types::{User, UserId};
use std::future::Future;

/// User repository.
///
/// This trait abstracts over user storage. Registration owns user creation;
/// the booking flow only reads.
pub trait UserRepository: Send + Sync {
    /// Get user by ID.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Storage query fails
    /// - User not found → `BookingError::UserNotFound`
    fn find_by_id(&self, user_id: &UserId) -> impl Future<Output = Result<User>> + Send;

    /// Store a user, replacing any record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns error if storage fails.
    fn save(&self, user: &User) -> impl Future<Output = Result<()>> + Send;
}
