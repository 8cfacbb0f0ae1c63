use talk2job_core::{SessionStore, SessionStoreError, SessionToken};

/// Error types for the end-session use case
#[derive(Debug, thiserror::Error)]
pub enum EndSessionError {
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// End-session use case - removes the server-side session. Idempotent:
/// ending an absent or already-ended session succeeds.
pub struct EndSessionUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> EndSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "EndSessionUseCase::execute", skip_all)]
    pub async fn execute(&self, token: Option<SessionToken>) -> Result<(), EndSessionError> {
        if let Some(token) = token {
            self.session_store.remove(&token).await?;
        }
        Ok(())
    }
}
