use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use talk2job_core::SessionToken;

/// Build the session cookie. HttpOnly and SameSite=Lax always; Secure only
/// outside development so local HTTP still works.
pub fn create_session_cookie(
    name: &str,
    token: &SessionToken,
    ttl_seconds: i64,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name.to_string(), token.as_str().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(ttl_seconds))
        .build()
}

/// A cookie that clears the session cookie. The path must match the one the
/// cookie was set with or browsers keep the original.
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(name.to_string()).path("/").build()
}

pub fn extract_session_token(jar: &CookieJar, name: &str) -> Option<SessionToken> {
    jar.get(name).map(|cookie| SessionToken::parse(cookie.value()))
}
