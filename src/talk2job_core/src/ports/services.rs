use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    identity::{IdToken, Identity, VerifiedIdentity},
    password::Password,
    provider_code::{GENERIC_PROVIDER_MESSAGE, ProviderCode},
    user::UserId,
    validation::FormField,
};

#[derive(Debug, Error)]
pub enum IdentityError {
    /// A failure the provider reported with a code we recognize.
    #[error("{}", .0.message())]
    Code(ProviderCode),
    /// A provider failure we have no mapping for. The raw code is kept for
    /// logs; users get the generic message.
    #[error("{GENERIC_PROVIDER_MESSAGE}")]
    Unrecognized(String),
}

impl IdentityError {
    pub fn field(&self) -> FormField {
        match self {
            IdentityError::Code(code) => code.field(),
            IdentityError::Unrecognized(_) => FormField::General,
        }
    }
}

/// The slice of the identity provider this service consumes. Credential
/// verification and token issuance happen on the provider's side; we only
/// hold the returned identities and tokens.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a new email/password account. The returned identity carries a
    /// fresh id token.
    async fn create_account(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Identity, IdentityError>;

    /// Verify email/password credentials, returning the identity and a
    /// fresh id token on success.
    async fn verify_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Identity, IdentityError>;

    /// Verify an id token server-side and resolve the identity behind it.
    async fn verify_id_token(&self, token: &IdToken) -> Result<VerifiedIdentity, IdentityError>;

    /// Dispatch a password-reset email.
    async fn send_password_reset(&self, email: &Email) -> Result<(), IdentityError>;

    /// Invalidate the identity's outstanding tokens. Server-side analogue
    /// of signing the client out, used to undo a half-finished OAuth flow.
    async fn revoke(&self, id: &UserId) -> Result<(), IdentityError>;
}
