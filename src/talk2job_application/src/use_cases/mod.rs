pub mod current_user;
pub mod dashboard;
pub mod end_session;
pub mod establish_session;
pub mod oauth_sign_in;
pub mod password_reset;
pub mod sign_up;

#[cfg(test)]
pub(crate) mod test_support;
