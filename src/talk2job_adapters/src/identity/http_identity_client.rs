//! HTTP client for the hosted identity provider's account REST API.
//!
//! The provider exposes account operations as `accounts:<verb>` endpoints
//! authenticated by an API key query parameter, and reports failures as an
//! error envelope whose `message` carries a machine-readable code (for
//! example `EMAIL_EXISTS` or `WEAK_PASSWORD : ...`). Those codes are
//! normalized into [`ProviderCode`] here; nothing above this adapter sees
//! provider wire formats.

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, de::DeserializeOwned};
use talk2job_core::{
    Email, IdToken, Identity, IdentityError, IdentityProvider, Password, ProviderCode, UserId,
    VerifiedIdentity,
};

#[derive(Clone)]
pub struct HttpIdentityClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl HttpIdentityClient {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, IdentityError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| IdentityError::Unrecognized(e.to_string()))?;
        let url = base
            .join(endpoint)
            .map_err(|e| IdentityError::Unrecognized(e.to_string()))?;

        let response = self
            .http_client
            .post(url)
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(body)
            .send()
            .await
            .map_err(|_| IdentityError::Code(ProviderCode::NetworkFailure))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| IdentityError::Unrecognized(e.to_string()))
        } else {
            let envelope: ErrorEnvelope = response
                .json()
                .await
                .map_err(|e| IdentityError::Unrecognized(e.to_string()))?;
            Err(map_provider_error(&envelope.error.message))
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityClient {
    #[tracing::instrument(name = "Creating identity account", skip_all)]
    async fn create_account(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Identity, IdentityError> {
        let response: AccountResponse = self
            .post_json(
                "/v1/accounts:signUp",
                &CredentialsRequest {
                    email: email.as_ref().expose_secret(),
                    password: password.as_ref().expose_secret(),
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(response.into_identity())
    }

    #[tracing::instrument(name = "Verifying identity credentials", skip_all)]
    async fn verify_credentials(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Identity, IdentityError> {
        let response: AccountResponse = self
            .post_json(
                "/v1/accounts:signInWithPassword",
                &CredentialsRequest {
                    email: email.as_ref().expose_secret(),
                    password: password.as_ref().expose_secret(),
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(response.into_identity())
    }

    #[tracing::instrument(name = "Verifying id token", skip_all)]
    async fn verify_id_token(&self, token: &IdToken) -> Result<VerifiedIdentity, IdentityError> {
        let response: LookupResponse = self
            .post_json(
                "/v1/accounts:lookup",
                &LookupRequest {
                    id_token: token.expose(),
                },
            )
            .await?;

        let record = response
            .users
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(IdentityError::Code(ProviderCode::InvalidCredential))?;

        Ok(VerifiedIdentity {
            id: UserId::new(record.local_id),
            email: parse_email(record.email),
            display_name: record.display_name,
        })
    }

    #[tracing::instrument(name = "Dispatching password reset email", skip_all)]
    async fn send_password_reset(&self, email: &Email) -> Result<(), IdentityError> {
        let _: serde_json::Value = self
            .post_json(
                "/v1/accounts:sendOobCode",
                &SendOobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email: email.as_ref().expose_secret(),
                },
            )
            .await?;
        Ok(())
    }

    #[tracing::instrument(name = "Revoking identity tokens", skip_all)]
    async fn revoke(&self, id: &UserId) -> Result<(), IdentityError> {
        let _: serde_json::Value = self
            .post_json(
                "/v1/accounts:signOut",
                &SignOutRequest {
                    local_id: id.as_str(),
                },
            )
            .await?;
        Ok(())
    }
}

fn parse_email(raw: Option<String>) -> Option<Email> {
    raw.and_then(|raw| Email::try_from(Secret::from(raw)).ok())
}

/// Normalize a provider error code. Some codes carry a trailing
/// human-readable suffix (`WEAK_PASSWORD : Password should be ...`), so
/// only the first token is matched.
fn map_provider_error(message: &str) -> IdentityError {
    let code = message.split_whitespace().next().unwrap_or(message);
    let mapped = match code {
        "INVALID_EMAIL" => ProviderCode::InvalidEmail,
        "USER_DISABLED" => ProviderCode::UserDisabled,
        "EMAIL_NOT_FOUND" => ProviderCode::UserNotFound,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_ID_TOKEN" => ProviderCode::InvalidCredential,
        "INVALID_PASSWORD" => ProviderCode::WrongPassword,
        "EMAIL_EXISTS" => ProviderCode::EmailAlreadyInUse,
        "WEAK_PASSWORD" => ProviderCode::WeakPassword,
        "OPERATION_NOT_ALLOWED" => ProviderCode::OperationNotAllowed,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => ProviderCode::TooManyRequests,
        "FEDERATED_USER_ID_ALREADY_LINKED" => ProviderCode::AccountExistsWithDifferentMethod,
        other => return IdentityError::Unrecognized(other.to_string()),
    };
    IdentityError::Code(mapped)
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SendOobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignOutRequest<'a> {
    local_id: &'a str,
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    id_token: String,
    email: Option<String>,
    display_name: Option<String>,
}

impl AccountResponse {
    fn into_identity(self) -> Identity {
        Identity {
            id: UserId::new(self.local_id),
            email: parse_email(self.email),
            display_name: self.display_name,
            id_token: IdToken::new(self.id_token),
        }
    }
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    users: Option<Vec<AccountRecord>>,
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(serde::Deserialize, Debug)]
struct ErrorBody {
    message: String,
}
