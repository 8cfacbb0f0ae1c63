use serde::Serialize;

use crate::domain::validation::ValidationError;

/// A display name of at least 3 non-whitespace-trimmed characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserName(String);

impl UserName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.chars().count() >= 3 {
            Ok(UserName(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidName)
        }
    }
}
