use talk2job_core::{
    Email, IdentityError, IdentityProvider, Password, User, UserName, UserStore, UserStoreError,
};

/// Error types specific to the sign-up use case
#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error("{0}")]
    Identity(#[from] IdentityError),
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
}

/// Sign-up use case - creates the account at the identity provider, then
/// registers the matching application user keyed by the new identity's id.
pub struct SignUpUseCase<I, U>
where
    I: IdentityProvider,
    U: UserStore,
{
    identity_provider: I,
    user_store: U,
}

impl<I, U> SignUpUseCase<I, U>
where
    I: IdentityProvider,
    U: UserStore,
{
    pub fn new(identity_provider: I, user_store: U) -> Self {
        Self {
            identity_provider,
            user_store,
        }
    }

    /// Execute the sign-up use case
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Validated password
    ///
    /// # Returns
    /// Ok(()) once both the identity account and the user record exist
    #[tracing::instrument(name = "SignUpUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: UserName,
        email: Email,
        password: Password,
    ) -> Result<(), SignUpError> {
        let identity = self
            .identity_provider
            .create_account(&email, &password)
            .await?;

        let user = User::new(identity.id, name, email);
        self.user_store.add_user(user).await?;

        Ok(())
    }
}
