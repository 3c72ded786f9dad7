//! Mock webinar repository for testing.

use super::lock_poisoned;
use crate::error::{BookingError, Result};
use crate::providers::WebinarRepository;
use crate::types::{Webinar, WebinarId};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock webinar repository.
///
/// Uses in-memory storage for testing. Lookups return the first webinar
/// created with a matching ID.
#[derive(Debug, Clone, Default)]
pub struct MockWebinarRepository {
    webinars: Arc<Mutex<Vec<Webinar>>>,
}

impl MockWebinarRepository {
    /// Create a new, empty mock webinar repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock webinar repository seeded with `webinars`.
    #[must_use]
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        Self {
            webinars: Arc::new(Mutex::new(webinars.into_iter().collect())),
        }
    }
}

impl WebinarRepository for MockWebinarRepository {
    fn find_by_id(&self, webinar_id: &WebinarId) -> impl Future<Output = Result<Webinar>> + Send {
        let webinars = Arc::clone(&self.webinars);
        let webinar_id = webinar_id.clone();

        async move {
            let found = webinars
                .lock()
                .map_err(|_| lock_poisoned())?
                .iter()
                .find(|webinar| webinar.id == webinar_id)
                .cloned();
            found.ok_or(BookingError::WebinarNotFound { webinar_id })
        }
    }

    fn create(&self, webinar: &Webinar) -> impl Future<Output = Result<()>> + Send {
        let webinars = Arc::clone(&self.webinars);
        let webinar = webinar.clone();

        async move {
            webinars.lock().map_err(|_| lock_poisoned())?.push(webinar);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    #[allow(clippy::unwrap_used)]
    async fn test_create_then_find() {
        let repo = MockWebinarRepository::new();
        let now = Utc::now();
        let webinar = Webinar::new("1", "organizer", "Webinar 1", now, now, 10);
        repo.create(&webinar).await.unwrap();

        assert_eq!(repo.find_by_id(&WebinarId::from("1")).await.unwrap(), webinar);
    }

    #[tokio::test]
    async fn test_find_missing_webinar() {
        let repo = MockWebinarRepository::new();
        let result = repo.find_by_id(&WebinarId::from("404")).await;
        assert!(matches!(result, Err(BookingError::WebinarNotFound { .. })));
    }
}
