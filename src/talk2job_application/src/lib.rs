pub mod use_cases;

pub use use_cases::{
    current_user::CurrentUserUseCase,
    dashboard::{DashboardListing, DashboardUseCase},
    end_session::{EndSessionError, EndSessionUseCase},
    establish_session::{EstablishSessionError, EstablishSessionUseCase},
    oauth_sign_in::{OAuthMode, OAuthSignInError, OAuthSignInUseCase},
    password_reset::PasswordResetUseCase,
    sign_up::{SignUpError, SignUpUseCase},
};
