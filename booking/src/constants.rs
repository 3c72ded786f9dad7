//! Booking constants.
//!
//! Confirmation email templates and default addresses.

/// Address that receives booking confirmations unless organizer
/// resolution is enabled.
pub const DEFAULT_ORGANIZER_ADDRESS: &str = "organisateur@gmail.com";

/// Confirmation email rendering.
pub mod confirmation {
    /// Subject line of the organizer confirmation.
    #[must_use]
    pub fn subject(webinar_title: &str) -> String {
        format!("Confirmation de réservation pour le webinaire {webinar_title}")
    }

    /// Body of the organizer confirmation.
    #[must_use]
    pub fn body(participant_email: &str, webinar_title: &str) -> String {
        format!(
            "Bonjour l'utilisateur avec le mail suivant : {participant_email} s'est inscrit pour le webinaire : {webinar_title}."
        )
    }
}
