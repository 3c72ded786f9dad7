//! Error types for booking operations.

use crate::types::{UserId, WebinarId};
use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Error taxonomy for the booking use case and its ports.
///
/// Domain errors are terminal and never retried; they surface to the caller
/// for translation into user-facing responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    // ═══════════════════════════════════════════════════════════
    // Lookup Errors
    // ═══════════════════════════════════════════════════════════

    /// No webinar matches the requested ID.
    #[error("Webinar with id {webinar_id} not found")]
    WebinarNotFound {
        /// Requested webinar ID
        webinar_id: WebinarId,
    },

    /// No user matches the requested ID.
    #[error("User with id {user_id} not found")]
    UserNotFound {
        /// Requested user ID
        user_id: UserId,
    },

    // ═══════════════════════════════════════════════════════════
    // Booking Rules
    // ═══════════════════════════════════════════════════════════

    /// Every seat of the webinar is taken.
    #[error("Webinar has no more seat")]
    WebinarNoMoreSeat,

    /// The user already holds a seat at this webinar.
    #[error("User already participate in this webinar")]
    WebinarUserAlreadyParticipate,

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════

    /// Repository adapter failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Mailer adapter failed.
    #[error("Failed to send email: {0}")]
    EmailDeliveryFailed(String),
}

impl BookingError {
    /// Returns `true` for the four domain failures of a booking attempt.
    ///
    /// # Examples
    ///
    /// ```
    /// # use webinar_booking::BookingError;
    /// assert!(BookingError::WebinarNoMoreSeat.is_business_rule());
    /// assert!(!BookingError::Storage("poisoned".into()).is_business_rule());
    /// ```
    #[must_use]
    pub const fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::WebinarNotFound { .. }
                | Self::UserNotFound { .. }
                | Self::WebinarNoMoreSeat
                | Self::WebinarUserAlreadyParticipate
        )
    }

    /// Returns `true` if a looked-up record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::WebinarNotFound { .. } | Self::UserNotFound { .. })
    }
}
