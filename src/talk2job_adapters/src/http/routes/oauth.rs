use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use chrono::Duration;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use talk2job_application::{OAuthMode, OAuthSignInUseCase};
use talk2job_core::{IdToken, IdentityProvider, SessionStore, UserStore};

use crate::config::Settings;
use crate::http::cookies::create_session_cookie;

use super::error::{ApiError, AuthResponse};

#[derive(Deserialize)]
pub struct OAuthRequest {
    #[serde(rename = "idToken")]
    pub id_token: Secret<String>,
    pub mode: OAuthRequestMode,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum OAuthRequestMode {
    SignIn,
    SignUp,
}

impl From<OAuthRequestMode> for OAuthMode {
    fn from(mode: OAuthRequestMode) -> Self {
        match mode {
            OAuthRequestMode::SignIn => OAuthMode::SignIn,
            OAuthRequestMode::SignUp => OAuthMode::SignUp,
        }
    }
}

/// Finish a provider OAuth popup: verify the handed-back id token and mint
/// the session cookie. Sign-up mode also registers the application user.
#[tracing::instrument(name = "OAuth sign in", skip_all)]
pub async fn oauth<I, U, S>(
    State((identity_provider, user_store, session_store)): State<(I, U, S)>,
    jar: CookieJar,
    Json(request): Json<OAuthRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityProvider + Clone + 'static,
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let settings = Settings::load();

    let use_case = OAuthSignInUseCase::new(
        identity_provider,
        user_store,
        session_store,
        Duration::seconds(settings.session.ttl_seconds),
    );

    let id_token = IdToken::new(request.id_token.expose_secret().clone());
    let (token, _session) = use_case.execute(id_token, request.mode.into()).await?;

    let cookie = create_session_cookie(
        &settings.session.cookie_name,
        &token,
        settings.session.ttl_seconds,
        settings.app.environment.is_production(),
    );

    Ok((
        jar.add(cookie),
        Json(AuthResponse::success("Signed in successfully.")),
    ))
}
