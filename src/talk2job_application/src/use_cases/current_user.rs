use chrono::Utc;
use talk2job_core::{SessionStore, SessionToken, User, UserStore};

/// Current-user use case - resolves a session token to the application user
/// it is bound to. Computed fresh per request from the cookie; there is no
/// process-wide cache.
///
/// Fail-closed by design: an absent, unknown, or expired token, a store
/// failure, or a dangling user id all resolve to `None`. This never errors.
pub struct CurrentUserUseCase<S, U>
where
    S: SessionStore,
    U: UserStore,
{
    session_store: S,
    user_store: U,
}

impl<S, U> CurrentUserUseCase<S, U>
where
    S: SessionStore,
    U: UserStore,
{
    pub fn new(session_store: S, user_store: U) -> Self {
        Self {
            session_store,
            user_store,
        }
    }

    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip_all)]
    pub async fn execute(&self, token: Option<&SessionToken>) -> Option<User> {
        let token = token?;
        let session = self.session_store.get(token).await.ok().flatten()?;
        if session.is_expired(Utc::now()) {
            return None;
        }
        self.user_store.get_user_by_id(&session.user_id).await.ok()
    }
}
