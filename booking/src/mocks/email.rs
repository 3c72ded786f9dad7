//! Mock mailer for testing.

use super::lock_poisoned;
use crate::error::{BookingError, Result};
use crate::providers::Mailer;
use crate::types::Email;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock mailer.
///
/// Simulates email delivery without actually sending emails. Delivered
/// emails are recorded and can be inspected with [`sent_emails`](Self::sent_emails).
#[derive(Debug, Clone)]
pub struct MockMailer {
    /// Whether to simulate success or failure.
    pub should_succeed: bool,

    sent: Arc<Mutex<Vec<Email>>>,
}

impl MockMailer {
    /// Create a new mock mailer that succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_succeed: true,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock mailer whose every delivery fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            should_succeed: false,
            ..Self::new()
        }
    }

    /// Emails delivered so far, oldest first (for testing).
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn sent_emails(&self) -> Result<Vec<Email>> {
        Ok(self.sent.lock().map_err(|_| lock_poisoned())?.clone())
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailer for MockMailer {
    fn send(&self, email: &Email) -> impl Future<Output = Result<()>> + Send {
        let sent = Arc::clone(&self.sent);
        let should_succeed = self.should_succeed;
        let email = email.clone();

        async move {
            if !should_succeed {
                return Err(BookingError::EmailDeliveryFailed(format!(
                    "simulated failure sending to {}",
                    email.to
                )));
            }
            sent.lock().map_err(|_| lock_poisoned())?.push(email);
            Ok(())
        }
    }
}
