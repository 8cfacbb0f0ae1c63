use secrecy::{ExposeSecret, Secret};

use crate::domain::{email::Email, user::UserId};

/// A short-lived bearer token proving a successful authentication with the
/// identity provider. Exchanged exactly once for a server session.
#[derive(Clone)]
pub struct IdToken(Secret<String>);

impl IdToken {
    pub fn new(token: impl Into<String>) -> Self {
        IdToken(Secret::from(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for IdToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IdToken([REDACTED])")
    }
}

/// What the identity provider hands back after creating or verifying an
/// account: the identity plus a freshly minted id token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: UserId,
    pub email: Option<Email>,
    pub display_name: Option<String>,
    pub id_token: IdToken,
}

/// The result of verifying an id token server-side. No new token is issued;
/// this is proof that the presented token belongs to the identity.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub id: UserId,
    pub email: Option<Email>,
    pub display_name: Option<String>,
}
