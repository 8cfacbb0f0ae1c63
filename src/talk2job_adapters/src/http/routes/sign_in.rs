use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use chrono::Duration;
use secrecy::Secret;
use serde::Deserialize;
use talk2job_application::EstablishSessionUseCase;
use talk2job_core::{Email, IdentityProvider, Password, SessionStore, UserStore};

use crate::config::Settings;
use crate::http::cookies::create_session_cookie;

use super::error::{ApiError, AuthResponse};

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Verify credentials at the identity provider, then exchange the returned
/// id token for an opaque session cookie.
#[tracing::instrument(name = "Sign in", skip_all)]
pub async fn sign_in<I, U, S>(
    State((identity_provider, user_store, session_store)): State<(I, U, S)>,
    jar: CookieJar,
    Json(request): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityProvider + Clone + 'static,
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let settings = Settings::load();

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let identity = identity_provider
        .verify_credentials(&email, &password)
        .await?;

    let use_case = EstablishSessionUseCase::new(
        identity_provider,
        user_store,
        session_store,
        Duration::seconds(settings.session.ttl_seconds),
    );
    let (token, _session) = use_case.execute(email, identity.id_token).await?;

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
