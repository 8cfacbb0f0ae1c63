use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use talk2job_application::SignUpUseCase;
use talk2job_core::{Email, IdentityProvider, Password, UserName, UserStore, ValidationError};

use super::error::{ApiError, AuthResponse};

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(rename = "termsAccepted")]
    pub terms_accepted: bool,
}

#[tracing::instrument(name = "Sign up", skip_all)]
pub async fn sign_up<I, U>(
    State((identity_provider, user_store)): State<(I, U)>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityProvider + Clone + 'static,
    U: UserStore + Clone + 'static,
{
    // Checked before field validation so the terms message is not masked
    // by a field error.
    if !request.terms_accepted {
        return Err(ValidationError::TermsNotAccepted.into());
    }

    let name = UserName::try_from(request.name)?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = SignUpUseCase::new(identity_provider, user_store);
    use_case.execute(name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::success(
            "Account created successfully. Please sign in.",
        )),
    ))
}
