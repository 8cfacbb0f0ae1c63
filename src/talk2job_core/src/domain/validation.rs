use thiserror::Error;

/// The form field an error message should be attached to in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Name,
    General,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Name => "name",
            FormField::General => "general",
        }
    }
}

/// Input validation errors. These are checked before any identity-provider
/// call is made; a request that fails validation never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error(
        "Password must be at least 8 characters and include an uppercase letter and a digit."
    )]
    InvalidPassword,
    #[error("Name must be at least 3 characters.")]
    InvalidName,
    #[error("You must accept the terms of service to create an account.")]
    TermsNotAccepted,
}

impl ValidationError {
    pub fn field(self) -> FormField {
        match self {
            ValidationError::InvalidEmail => FormField::Email,
            ValidationError::InvalidPassword => FormField::Password,
            ValidationError::InvalidName => FormField::Name,
            ValidationError::TermsNotAccepted => FormField::General,
        }
    }
}
