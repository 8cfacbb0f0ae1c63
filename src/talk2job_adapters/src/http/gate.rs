//! Session gate middleware and the request extractors built on it.
//!
//! The gate resolves the session cookie to an application user once per
//! request and stashes the result as a request extension. Handlers then
//! declare what they need: [`AuthenticatedUser`] redirects anonymous
//! visitors to the sign-in page, [`MaybeUser`] never rejects.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;
use talk2job_application::CurrentUserUseCase;
use talk2job_core::{SessionStore, User, UserStore};

use crate::config::Settings;
use crate::http::cookies::extract_session_token;

/// The per-request resolution of the session cookie. `None` covers every
/// way a request can be anonymous: no cookie, unknown token, expired
/// session, or a store failure.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

#[tracing::instrument(name = "Session gate", skip_all)]
pub async fn session_gate<S, U>(
    State((session_store, user_store)): State<(S, U)>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response
where
    S: SessionStore + Clone + 'static,
    U: UserStore + Clone + 'static,
{
    let settings = Settings::load();
    let token = extract_session_token(&jar, &settings.session.cookie_name);

    let use_case = CurrentUserUseCase::new(session_store, user_store);
    let user = use_case.execute(token.as_ref()).await;

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

/// Extractor for pages that require a signed-in user. Anonymous requests
/// are redirected to the sign-in page.
pub struct AuthenticatedUser(pub User);

impl<St> FromRequestParts<St> for AuthenticatedUser
where
    St: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<CurrentUser>() {
            Some(CurrentUser(Some(user))) => Ok(AuthenticatedUser(user.clone())),
            _ => Err(Redirect::to("/sign-in")),
        }
    }
}

/// Extractor for pages that render either way but vary on the visitor.
pub struct MaybeUser(pub Option<User>);

impl<St> FromRequestParts<St> for MaybeUser
where
    St: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .and_then(|current| current.0.clone());
        Ok(MaybeUser(user))
    }
}
