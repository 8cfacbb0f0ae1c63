use talk2job_core::{Email, IdentityError, IdentityProvider, ProviderCode};

/// Password-reset use case - asks the identity provider to dispatch a reset
/// email. An unknown account is reported as success so the endpoint cannot
/// be used to enumerate registered emails.
pub struct PasswordResetUseCase<I>
where
    I: IdentityProvider,
{
    identity_provider: I,
}

impl<I> PasswordResetUseCase<I>
where
    I: IdentityProvider,
{
    pub fn new(identity_provider: I) -> Self {
        Self { identity_provider }
    }

    #[tracing::instrument(name = "PasswordResetUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<(), IdentityError> {
        match self.identity_provider.send_password_reset(&email).await {
            Ok(()) | Err(IdentityError::Code(ProviderCode::UserNotFound)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
