pub mod email;
pub mod identity;
pub mod interview;
pub mod password;
pub mod provider_code;
pub mod session;
pub mod user;
pub mod user_name;
pub mod validation;
