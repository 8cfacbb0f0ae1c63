use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::domain::{
    email::Email, user_name::UserName, validation::ValidationError,
};

/// The identity provider's unique id for an account. Application users are
/// keyed by it, so one identity maps to at most one user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An application user record: the only durable thing this service owns
/// about a person. Credentials live at the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
}

impl User {
    pub fn new(id: UserId, name: UserName, email: Email) -> Self {
        Self { id, name, email }
    }

    /// Rebuild a user from raw persisted values, re-running domain validation.
    pub fn parse(id: String, name: String, email: Secret<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: UserId::new(id),
            name: UserName::try_from(name)?,
            email: Email::try_from(email)?,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
