use chrono::Duration;
use talk2job_core::{
    Email, IdToken, IdentityProvider, Session, SessionStore, SessionStoreError, SessionToken,
    UserStore, UserStoreError,
};

/// Error types specific to the establish-session use case
#[derive(Debug, thiserror::Error)]
pub enum EstablishSessionError {
    #[error("Invalid or expired identity token.")]
    InvalidToken,
    #[error("No account found with this email")]
    UserNotFound,
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
    #[error("User store error: {0}")]
    UserStore(UserStoreError),
}

/// Establish-session use case - exchanges a verified identity token for an
/// opaque server session bound to the matching application user.
pub struct EstablishSessionUseCase<I, U, S>
where
    I: IdentityProvider,
    U: UserStore,
    S: SessionStore,
{
    identity_provider: I,
    user_store: U,
    session_store: S,
    session_ttl: Duration,
}

impl<I, U, S> EstablishSessionUseCase<I, U, S>
where
    I: IdentityProvider,
    U: UserStore,
    S: SessionStore,
{
    pub fn new(identity_provider: I, user_store: U, session_store: S, session_ttl: Duration) -> Self {
        Self {
            identity_provider,
            user_store,
            session_store,
            session_ttl,
        }
    }

    /// Execute the establish-session use case
    ///
    /// # Arguments
    /// * `email` - Email the caller claims to have authenticated as
    /// * `id_token` - Identity token issued by the provider
    ///
    /// # Returns
    /// The minted session token and its server-side session record
    #[tracing::instrument(name = "EstablishSessionUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        id_token: IdToken,
    ) -> Result<(SessionToken, Session), EstablishSessionError> {
        let verified = self
            .identity_provider
            .verify_id_token(&id_token)
            .await
            .map_err(|_| EstablishSessionError::InvalidToken)?;

        // The token must belong to the claimed email. An identity the
        // provider knows no email for cannot be bound to one here.
        if verified.email.as_ref() != Some(&email) {
            return Err(EstablishSessionError::InvalidToken);
        }

        let user = self
            .user_store
            .get_user_by_email(&email)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => EstablishSessionError::UserNotFound,
                other => EstablishSessionError::UserStore(other),
            })?;

        let token = SessionToken::generate();
        let session = Session::new(user.id().clone(), self.session_ttl);
        self.session_store
            .insert(token.clone(), session.clone())
            .await?;

        Ok((token, session))
    }
}
