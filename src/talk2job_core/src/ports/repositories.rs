use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    interview::Interview,
    session::{Session, SessionToken},
    user::{User, UserId},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Application-user records, keyed by identity id. Emails are unique too:
/// both the id and the email of a new user must be unmapped.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Opaque-token session records. `get` of an unknown token is `Ok(None)`,
/// and `remove` of an unknown token succeeds; only infrastructure failures
/// are errors.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: SessionToken, session: Session) -> Result<(), SessionStoreError>;
    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError>;
    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
}

// InterviewStore port trait and errors
#[derive(Debug, Error)]
pub enum InterviewStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only access to interview listings for the dashboard.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn interviews_for_user(&self, user: &UserId)
    -> Result<Vec<Interview>, InterviewStoreError>;

    /// Latest interviews from other users, newest first, at most `limit`.
    async fn latest_interviews(
        &self,
        exclude_user: &UserId,
        limit: usize,
    ) -> Result<Vec<Interview>, InterviewStoreError>;
}
