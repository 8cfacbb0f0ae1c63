pub mod error;
pub mod forgot_password;
pub mod logout;
pub mod oauth;
pub mod pages;
pub mod sign_in;
pub mod sign_up;

pub use error::{ApiError, AuthResponse};
pub use forgot_password::{ForgotPasswordRequest, forgot_password};
pub use logout::logout;
pub use oauth::{OAuthRequest, OAuthRequestMode, oauth};
pub use pages::{dashboard, interviews, root, sign_in_page, sign_up_page};
pub use sign_in::{SignInRequest, sign_in};
pub use sign_up::{SignUpRequest, sign_up};
