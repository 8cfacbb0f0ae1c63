use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use talk2job_application::{
    EndSessionError, EstablishSessionError, OAuthSignInError, SignUpError,
};
use talk2job_core::{FormField, IdentityError, ProviderCode, UserStoreError, ValidationError};
use thiserror::Error;

/// The uniform body of every auth endpoint response, success or failure.
/// `field` names the form field a failure message belongs to.
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl AuthResponse {
    pub fn success(message: impl Into<String>) -> Self {
        AuthResponse {
            success: true,
            message: message.into(),
            field: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    #[error("{0}")]
    Identity(#[from] IdentityError),

    #[error("No account found with this email")]
    UserNotFound,

    #[error("An account already exists with this email address.")]
    UserAlreadyExists,

    #[error("Invalid or expired identity token.")]
    InvalidToken,

    #[error("Email address is required. Please try again with an account that has an email.")]
    EmailRequired,

    #[error("Failed to logout.")]
    LogoutFailed,

    #[error("An unexpected error occurred. Please try again.")]
    UnexpectedError(String),
}

impl ApiError {
    fn field(&self) -> FormField {
        match self {
            ApiError::InvalidInput(e) => e.field(),
            ApiError::Identity(e) => e.field(),
            ApiError::UserNotFound | ApiError::UserAlreadyExists => FormField::Email,
            ApiError::InvalidToken
            | ApiError::EmailRequired
            | ApiError::LogoutFailed
            | ApiError::UnexpectedError(_) => FormField::General,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::EmailRequired => StatusCode::BAD_REQUEST,

            ApiError::UserAlreadyExists => StatusCode::CONFLICT,

            ApiError::Identity(IdentityError::Code(code)) => match code {
                ProviderCode::EmailAlreadyInUse => StatusCode::CONFLICT,
                ProviderCode::InvalidEmail
                | ProviderCode::WeakPassword
                | ProviderCode::OperationNotAllowed => StatusCode::BAD_REQUEST,
                ProviderCode::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
                ProviderCode::NetworkFailure => StatusCode::BAD_GATEWAY,
                _ => StatusCode::UNAUTHORIZED,
            },
            ApiError::Identity(IdentityError::Unrecognized(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::UserNotFound | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,

            ApiError::LogoutFailed | ApiError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::UnexpectedError(detail) = &self {
            tracing::error!(error = %detail, "request failed unexpectedly");
        }
        if let ApiError::Identity(IdentityError::Unrecognized(code)) = &self {
            tracing::error!(provider_code = %code, "unrecognized identity provider error");
        }

        let body = Json(AuthResponse {
            success: false,
            message: self.to_string(),
            field: Some(self.field().as_str()),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => ApiError::UserNotFound,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SignUpError> for ApiError {
    fn from(error: SignUpError) -> Self {
        match error {
            SignUpError::Identity(e) => ApiError::Identity(e),
            SignUpError::UserStore(e) => e.into(),
        }
    }
}

impl From<EstablishSessionError> for ApiError {
    fn from(error: EstablishSessionError) -> Self {
        match error {
            EstablishSessionError::InvalidToken => ApiError::InvalidToken,
            EstablishSessionError::UserNotFound => ApiError::UserNotFound,
            EstablishSessionError::SessionStore(e) => ApiError::UnexpectedError(e.to_string()),
            EstablishSessionError::UserStore(e) => e.into(),
        }
    }
}

impl From<OAuthSignInError> for ApiError {
    fn from(error: OAuthSignInError) -> Self {
        match error {
            OAuthSignInError::InvalidToken => ApiError::InvalidToken,
            OAuthSignInError::EmailRequired => ApiError::EmailRequired,
            OAuthSignInError::UserNotFound => ApiError::UserNotFound,
            OAuthSignInError::UserStore(e) => e.into(),
            OAuthSignInError::SessionStore(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<EndSessionError> for ApiError {
    fn from(_: EndSessionError) -> Self {
        ApiError::LogoutFailed
    }
}
