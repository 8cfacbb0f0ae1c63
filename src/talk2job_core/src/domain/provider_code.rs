use crate::domain::validation::FormField;

/// Known identity-provider failure codes, normalized from the provider's
/// wire-level error strings by the identity client adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCode {
    InvalidEmail,
    UserDisabled,
    UserNotFound,
    InvalidCredential,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    OperationNotAllowed,
    TooManyRequests,
    PopupClosed,
    AccountExistsWithDifferentMethod,
    NetworkFailure,
}

/// Fallback for codes with no table entry and for unrecognized codes.
pub const GENERIC_PROVIDER_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Lookup table from provider code to the user-facing message and the form
/// field the message belongs to. A table rather than branching logic so the
/// mapping can be extended and tested row by row.
const MESSAGE_TABLE: &[(ProviderCode, FormField, &str)] = &[
    (
        ProviderCode::InvalidEmail,
        FormField::Email,
        "Invalid email address format.",
    ),
    (
        ProviderCode::UserDisabled,
        FormField::General,
        "This user account has been disabled.",
    ),
    (
        ProviderCode::UserNotFound,
        FormField::Email,
        "No account found with this email",
    ),
    (
        ProviderCode::InvalidCredential,
        FormField::Password,
        "Invalid email or password. Please check your credentials.",
    ),
    (
        ProviderCode::WrongPassword,
        FormField::Password,
        "Incorrect password. Please try again.",
    ),
    (
        ProviderCode::EmailAlreadyInUse,
        FormField::Email,
        "An account already exists with this email address.",
    ),
    (
        ProviderCode::WeakPassword,
        FormField::Password,
        "Password is too weak. Please choose a stronger password.",
    ),
    (
        ProviderCode::OperationNotAllowed,
        FormField::General,
        "Email/password accounts are not enabled.",
    ),
    (
        ProviderCode::TooManyRequests,
        FormField::General,
        "Too many attempts. Please try again later.",
    ),
    (
        ProviderCode::PopupClosed,
        FormField::General,
        "Authentication cancelled.",
    ),
    (
        ProviderCode::AccountExistsWithDifferentMethod,
        FormField::General,
        "An account already exists with this email using a different sign-in method.",
    ),
    (
        ProviderCode::NetworkFailure,
        FormField::General,
        "Network error. Please check your connection and try again.",
    ),
];

impl ProviderCode {
    /// Resolve the user-facing message and target field for this code.
    pub fn lookup(self) -> (FormField, &'static str) {
        MESSAGE_TABLE
            .iter()
            .find(|(code, _, _)| *code == self)
            .map(|(_, field, message)| (*field, *message))
            .unwrap_or((FormField::General, GENERIC_PROVIDER_MESSAGE))
    }

    pub fn message(self) -> &'static str {
        self.lookup().1
    }

    pub fn field(self) -> FormField {
        self.lookup().0
    }
}
