//! Mailer trait.

use crate::error::Result;
use crate::types::Email;
use std::future::Future;

/// Mailer.
///
/// This trait abstracts over email delivery services
/// (SMTP relays, SendGrid, AWS SES, etc.).
pub trait Mailer: Send + Sync {
    /// Send an email.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - Email provider rejects the request
    fn send(&self, email: &Email) -> impl Future<Output = Result<()>> + Send;
}
