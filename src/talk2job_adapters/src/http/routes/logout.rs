use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use talk2job_application::EndSessionUseCase;
use talk2job_core::SessionStore;

use crate::config::Settings;
use crate::http::cookies::{extract_session_token, removal_cookie};

use super::error::{ApiError, AuthResponse};

/// End the server-side session and clear the cookie. Idempotent: a request
/// without a session cookie still succeeds and still clears.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S>(
    State(session_store): State<S>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    S: SessionStore + Clone + 'static,
{
    let settings = Settings::load();
    let token = extract_session_token(&jar, &settings.session.cookie_name);

    let use_case = EndSessionUseCase::new(session_store);
    use_case.execute(token).await?;

    let jar = jar.remove(removal_cookie(&settings.session.cookie_name));

    Ok((jar, Json(AuthResponse::success("Logged out successfully."))))
}
