pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    identity::{IdToken, Identity, VerifiedIdentity},
    interview::Interview,
    password::Password,
    provider_code::ProviderCode,
    session::{Session, SessionToken},
    user::{User, UserId},
    user_name::UserName,
    validation::{FormField, ValidationError},
};

pub use ports::{
    repositories::{
        InterviewStore, InterviewStoreError, SessionStore, SessionStoreError, UserStore,
        UserStoreError,
    },
    services::{IdentityError, IdentityProvider},
};
