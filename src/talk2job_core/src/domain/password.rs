use secrecy::{ExposeSecret, Secret};

use crate::domain::validation::ValidationError;

/// A password that satisfies the signup policy: at least 8 characters,
/// at least one ASCII uppercase letter and at least one digit.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let candidate = value.expose_secret();
        let long_enough = candidate.chars().count() >= 8;
        let has_uppercase = candidate.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = candidate.chars().any(|c| c.is_ascii_digit());

        if long_enough && has_uppercase && has_digit {
            Ok(Password(value))
        } else {
            Err(ValidationError::InvalidPassword)
        }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
