use std::sync::Arc;

use dashmap::DashMap;
use talk2job_core::{Email, User, UserId, UserStore, UserStoreError};

/// In-memory user store for local runs and tests. Users are keyed by
/// identity id with the same uniqueness rules the Postgres store enforces
/// through constraints.
#[derive(Clone, Default)]
pub struct DashMapUserStore {
    users: Arc<DashMap<UserId, User>>,
}

impl DashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for DashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let duplicate = self.users.contains_key(user.id())
            || self
                .users
                .iter()
                .any(|entry| entry.value().email() == user.email());
        if duplicate {
            return Err(UserStoreError::UserAlreadyExists);
        }

        self.users.insert(user.id().clone(), user);
        Ok(())
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .iter()
            .find(|entry| entry.value().email() == email)
            .map(|entry| entry.value().clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(UserStoreError::UserNotFound)
    }
}
