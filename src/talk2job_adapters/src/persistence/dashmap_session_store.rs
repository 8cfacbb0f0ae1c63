use std::sync::Arc;

use dashmap::DashMap;
use talk2job_core::{Session, SessionStore, SessionStoreError, SessionToken};

/// In-memory session store for local runs and tests. Expiry is enforced by
/// the readers, so no eviction happens here.
#[derive(Clone, Default)]
pub struct DashMapSessionStore {
    sessions: Arc<DashMap<SessionToken, Session>>,
}

impl DashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[async_trait::async_trait]
impl SessionStore for DashMapSessionStore {
    async fn insert(&self, token: SessionToken, session: Session) -> Result<(), SessionStoreError> {
        self.sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.get(token).map(|entry| entry.value().clone()))
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.sessions.remove(token);
        Ok(())
    }
}
