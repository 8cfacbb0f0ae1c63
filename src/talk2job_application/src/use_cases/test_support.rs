//! Shared in-memory fakes for use-case tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use secrecy::{ExposeSecret, Secret};
use talk2job_core::{
    Email, IdToken, Identity, IdentityError, IdentityProvider, Password, ProviderCode, Session,
    SessionStore, SessionStoreError, SessionToken, User, UserId, UserName, UserStore,
    UserStoreError, VerifiedIdentity,
};

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn name(raw: &str) -> UserName {
    UserName::try_from(raw.to_string()).unwrap()
}

#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let duplicate = self.users.contains_key(user.id().as_str())
            || self.users.iter().any(|entry| entry.email() == user.email());
        if duplicate {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.id().as_str().to_string(), user);
        Ok(())
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .iter()
            .find(|entry| entry.email() == email)
            .map(|entry| entry.value().clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .get(id.as_str())
            .map(|entry| entry.value().clone())
            .ok_or(UserStoreError::UserNotFound)
    }
}

#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, Session>>,
    failing: Arc<AtomicBool>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_from_now_on(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn check(&self) -> Result<(), SessionStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(SessionStoreError::DatabaseError("store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, token: SessionToken, session: Session) -> Result<(), SessionStoreError> {
        self.check()?;
        self.sessions.insert(token.as_str().to_string(), session);
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        self.check()?;
        Ok(self.sessions.get(token.as_str()).map(|s| s.value().clone()))
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.check()?;
        self.sessions.remove(token.as_str());
        Ok(())
    }
}

/// Scriptable identity provider: accounts seeded through `with_account` /
/// `with_identity`, deterministic tokens of the form `token-{uid}`.
#[derive(Clone, Default)]
pub struct StubIdentityProvider {
    tokens: Arc<DashMap<String, VerifiedIdentity>>,
    accounts: Arc<DashMap<String, (UserId, String)>>,
    revoked: Arc<DashMap<String, ()>>,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn token_for(uid: &UserId) -> IdToken {
        IdToken::new(format!("token-{}", uid.as_str()))
    }

    /// Seed an email/password account.
    pub fn with_account(&self, uid: &str, raw_email: &str, raw_password: &str) -> IdToken {
        let id = UserId::new(uid);
        self.accounts
            .insert(raw_email.to_string(), (id.clone(), raw_password.to_string()));
        self.tokens.insert(
            format!("token-{uid}"),
            VerifiedIdentity {
                id: id.clone(),
                email: Some(email(raw_email)),
                display_name: None,
            },
        );
        Self::token_for(&id)
    }

    /// Seed an OAuth identity, possibly without an email.
    pub fn with_identity(
        &self,
        uid: &str,
        raw_email: Option<&str>,
        display_name: Option<&str>,
    ) -> IdToken {
        let id = UserId::new(uid);
        self.tokens.insert(
            format!("token-{uid}"),
            VerifiedIdentity {
                id: id.clone(),
                email: raw_email.map(email),
                display_name: display_name.map(str::to_string),
            },
        );
        Self::token_for(&id)
    }

    pub fn was_revoked(&self, uid: &str) -> bool {
        self.revoked.contains_key(uid)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn create_account(
        &self,
        email_input: &Email,
        password_input: &Password,
    ) -> Result<Identity, IdentityError> {
        let raw_email = email_input.as_ref().expose_secret().clone();
        if self.accounts.contains_key(&raw_email) {
            return Err(IdentityError::Code(ProviderCode::EmailAlreadyInUse));
        }
        let uid = format!("uid-{}", self.accounts.len() + 1);
        let token = self.with_account(&uid, &raw_email, password_input.as_ref().expose_secret());
        Ok(Identity {
            id: UserId::new(uid),
            email: Some(email_input.clone()),
            display_name: None,
            id_token: token,
        })
    }

    async fn verify_credentials(
        &self,
        email_input: &Email,
        password_input: &Password,
    ) -> Result<Identity, IdentityError> {
        let raw_email = email_input.as_ref().expose_secret();
        let entry = self
            .accounts
            .get(raw_email)
            .ok_or(IdentityError::Code(ProviderCode::UserNotFound))?;
        let (id, stored_password) = entry.value();
        if stored_password != password_input.as_ref().expose_secret() {
            return Err(IdentityError::Code(ProviderCode::InvalidCredential));
        }
        Ok(Identity {
            id: id.clone(),
            email: Some(email_input.clone()),
            display_name: None,
            id_token: Self::token_for(id),
        })
    }

    async fn verify_id_token(&self, token: &IdToken) -> Result<VerifiedIdentity, IdentityError> {
        let verified = self
            .tokens
            .get(token.expose())
            .map(|entry| entry.value().clone())
            .ok_or(IdentityError::Code(ProviderCode::InvalidCredential))?;
        if self.revoked.contains_key(verified.id.as_str()) {
            return Err(IdentityError::Code(ProviderCode::InvalidCredential));
        }
        Ok(verified)
    }

    async fn send_password_reset(&self, email_input: &Email) -> Result<(), IdentityError> {
        if self.accounts.contains_key(email_input.as_ref().expose_secret()) {
            Ok(())
        } else {
            Err(IdentityError::Code(ProviderCode::UserNotFound))
        }
    }

    async fn revoke(&self, id: &UserId) -> Result<(), IdentityError> {
        self.revoked.insert(id.as_str().to_string(), ());
        Ok(())
    }
}
