use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use talk2job_application::PasswordResetUseCase;
use talk2job_core::{Email, IdentityProvider};

use super::error::{ApiError, AuthResponse};

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Secret<String>,
}

/// Ask the provider to send a reset email. The response is the same whether
/// or not an account exists, so registered emails cannot be enumerated.
#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<I>(
    State(identity_provider): State<I>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityProvider + Clone + 'static,
{
    let email = Email::try_from(request.email)?;

    let use_case = PasswordResetUseCase::new(identity_provider);
    use_case.execute(email).await?;

    Ok(Json(AuthResponse::success(
        "If an account exists for this email, a reset link has been sent.",
    )))
}
