use chrono::Duration;
use secrecy::ExposeSecret;
use talk2job_core::{
    IdToken, IdentityProvider, Session, SessionStore, SessionStoreError, SessionToken, User,
    UserId, UserName, UserStore, UserStoreError,
};

/// Whether the OAuth popup was opened from the sign-in or sign-up form.
/// Sign-up additionally ensures an application user exists first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthMode {
    SignIn,
    SignUp,
}

/// Error types specific to the OAuth sign-in use case
#[derive(Debug, thiserror::Error)]
pub enum OAuthSignInError {
    #[error("Invalid or expired identity token.")]
    InvalidToken,
    #[error("Email address is required. Please try again with an account that has an email.")]
    EmailRequired,
    #[error("No account found with this email")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStore(UserStoreError),
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// OAuth sign-in use case - verifies a popup-issued identity token and
/// finishes with an established session.
///
/// On any server-side failure after the token verified, the identity is
/// revoked before the error is reported, so the browser is never left
/// authenticated at the provider without a matching session here.
pub struct OAuthSignInUseCase<I, U, S>
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

impl<I, U, S> OAuthSignInUseCase<I, U, S>
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

    #[tracing::instrument(name = "OAuthSignInUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        id_token: IdToken,
        mode: OAuthMode,
    ) -> Result<(SessionToken, Session), OAuthSignInError> {
        let verified = self
            .identity_provider
            .verify_id_token(&id_token)
            .await
            .map_err(|_| OAuthSignInError::InvalidToken)?;

        let Some(email) = verified.email.clone() else {
            self.revoke_quietly(&verified.id).await;
            return Err(OAuthSignInError::EmailRequired);
        };

        if mode == OAuthMode::SignUp {
            // Display name when usable, email otherwise.
            let name = verified
                .display_name
                .clone()
                .and_then(|n| UserName::try_from(n).ok())
                .or_else(|| UserName::try_from(email.as_ref().expose_secret().clone()).ok())
                .ok_or_else(|| {
                    OAuthSignInError::UserStore(UserStoreError::UnexpectedError(
                        "identity has no usable display name".to_string(),
                    ))
                })?;

            let user = User::new(verified.id.clone(), name, email.clone());
            match self.user_store.add_user(user).await {
                // An existing record is fine: the account was created
                // earlier, possibly through the password flow.
                Ok(()) | Err(UserStoreError::UserAlreadyExists) => {}
                Err(e) => {
                    self.revoke_quietly(&verified.id).await;
                    return Err(OAuthSignInError::UserStore(e));
                }
            }
        }

        let user = match self.user_store.get_user_by_email(&email).await {
            Ok(user) => user,
            Err(e) => {
                self.revoke_quietly(&verified.id).await;
                return Err(match e {
                    UserStoreError::UserNotFound => OAuthSignInError::UserNotFound,
                    other => OAuthSignInError::UserStore(other),
                });
            }
        };

        let token = SessionToken::generate();
        let session = Session::new(user.id().clone(), self.session_ttl);
        if let Err(e) = self.session_store.insert(token.clone(), session.clone()).await {
            self.revoke_quietly(&verified.id).await;
            return Err(OAuthSignInError::SessionStore(e));
        }

        Ok((token, session))
    }

    async fn revoke_quietly(&self, id: &UserId) {
        if let Err(e) = self.identity_provider.revoke(id).await {
            tracing::warn!(identity = %id, error = %e, "failed to revoke identity after aborted OAuth sign-in");
        }
    }
}
