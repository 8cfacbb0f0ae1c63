use std::sync::Arc;

use dashmap::DashMap;
use secrecy::ExposeSecret;
use talk2job_core::{
    Email, IdToken, Identity, IdentityError, IdentityProvider, Password, ProviderCode, UserId,
    VerifiedIdentity,
};

/// In-process stand-in for the hosted identity provider, used in local runs
/// and integration tests. Accounts live in a map, tokens are
/// `mock-token-<uid>`, and revocations are recorded rather than enforced.
#[derive(Clone, Default)]
pub struct MockIdentityClient {
    accounts: Arc<DashMap<UserId, MockAccount>>,
    revoked: Arc<DashMap<UserId, ()>>,
    next_id: Arc<std::sync::atomic::AtomicU64>,
}

#[derive(Clone)]
struct MockAccount {
    email: Option<Email>,
    password: Option<String>,
    display_name: Option<String>,
}

impl MockIdentityClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity directly, as if the account had been created
    /// through an external flow. Returns a token that verifies to it.
    pub fn seed_identity(
        &self,
        id: impl Into<String>,
        email: Option<Email>,
        display_name: Option<&str>,
    ) -> IdToken {
        let id = UserId::new(id);
        self.accounts.insert(
            id.clone(),
            MockAccount {
                email,
                password: None,
                display_name: display_name.map(str::to_string),
            },
        );
        token_for(&id)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn was_revoked(&self, id: &UserId) -> bool {
        self.revoked.contains_key(id)
    }

    fn find_by_email(&self, email: &Email) -> Option<(UserId, MockAccount)> {
        self.accounts
            .iter()
            .find(|entry| entry.value().email.as_ref() == Some(email))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
    }
}

fn token_for(id: &UserId) -> IdToken {
    IdToken::new(format!("mock-token-{id}"))
}

fn owner_of(token: &IdToken) -> Option<UserId> {
    token
        .expose()
        .strip_prefix("mock-token-")
        .map(UserId::new)
}

#[async_trait::async_trait]
impl IdentityProvider for MockIdentityClient {
    async fn create_account(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Identity, IdentityError> {
        if self.find_by_email(email).is_some() {
            return Err(IdentityError::Code(ProviderCode::EmailAlreadyInUse));
        }

        let seq = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let id = UserId::new(format!("mock-uid-{seq}"));
        self.accounts.insert(
            id.clone(),
            MockAccount {
                email: Some(email.clone()),
                password: Some(password.as_ref().expose_secret().clone()),
                display_name: None,
            },
        );

        Ok(Identity {
            id_token: token_for(&id),
            id,
            email: Some(email.clone()),
            display_name: None,
        })
    }

    async fn verify_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Identity, IdentityError> {
        let (id, account) = self
            .find_by_email(email)
            .ok_or(IdentityError::Code(ProviderCode::UserNotFound))?;

        if account.password.as_deref() != Some(password.as_ref().expose_secret().as_str()) {
            return Err(IdentityError::Code(ProviderCode::InvalidCredential));
        }

        Ok(Identity {
            id_token: token_for(&id),
            id,
            email: account.email,
            display_name: account.display_name,
        })
    }

    async fn verify_id_token(&self, token: &IdToken) -> Result<VerifiedIdentity, IdentityError> {
        let id = owner_of(token).ok_or(IdentityError::Code(ProviderCode::InvalidCredential))?;
        let account = self
            .accounts
            .get(&id)
            .ok_or(IdentityError::Code(ProviderCode::InvalidCredential))?;

        Ok(VerifiedIdentity {
            id: id.clone(),
            email: account.email.clone(),
            display_name: account.display_name.clone(),
        })
    }

    async fn send_password_reset(&self, email: &Email) -> Result<(), IdentityError> {
        if self.find_by_email(email).is_none() {
            return Err(IdentityError::Code(ProviderCode::UserNotFound));
        }
        Ok(())
    }

    async fn revoke(&self, id: &UserId) -> Result<(), IdentityError> {
        self.revoked.insert(id.clone(), ());
        Ok(())
    }
}
