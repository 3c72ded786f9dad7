//! Mock user repository for testing.

use super::lock_poisoned;
use crate::error::{BookingError, Result};
use crate::providers::UserRepository;
use crate::types::{User, UserId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock user repository.
///
/// Uses in-memory storage for testing.
#[derive(Debug, Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl MockUserRepository {
    /// Create a new, empty mock user repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a mock user repository seeded with `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    /// Get count of stored users (for testing).
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn user_count(&self) -> Result<usize> {
        Ok(self.users.lock().map_err(|_| lock_poisoned())?.len())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for MockUserRepository {
    fn find_by_id(&self, user_id: &UserId) -> impl Future<Output = Result<User>> + Send {
        let users = Arc::clone(&self.users);
        let user_id = user_id.clone();

        async move {
            let found = users
                .lock()
                .map_err(|_| lock_poisoned())?
                .get(&user_id)
                .cloned();
            found.ok_or(BookingError::UserNotFound { user_id })
        }
    }

    fn save(&self, user: &User) -> impl Future<Output = Result<()>> + Send {
        let users = Arc::clone(&self.users);
        let user = user.clone();

        async move {
            users
                .lock()
                .map_err(|_| lock_poisoned())?
                .insert(user.id.clone(), user);
            Ok(())
        }
    }
}
