use std::sync::Arc;

use redis::{Commands, Connection};
use talk2job_core::{Session, SessionStore, SessionStoreError, SessionToken};
use tokio::sync::Mutex;

/// Session records in Redis, serialized as JSON under a prefixed key with
/// the session TTL so Redis evicts them at expiry.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<Mutex<Connection>>,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<Mutex<Connection>>, ttl_seconds: u64) -> Self {
        Self { conn, ttl_seconds }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Storing session in Redis", skip_all)]
    async fn insert(&self, token: SessionToken, session: Session) -> Result<(), SessionStoreError> {
        let key = get_key(&token);
        let value = serde_json::to_string(&session)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        let mut conn = self.conn.lock().await;
        conn.set_ex(key, value, self.ttl_seconds)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Retrieving session from Redis", skip_all)]
    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        let key = get_key(token);

        let mut conn = self.conn.lock().await;
        let value: Option<String> = conn
            .get(&key)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        value
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Removing session from Redis", skip_all)]
    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        let key = get_key(token);

        let mut conn = self.conn.lock().await;
        conn.del(&key)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }
}

// Key prefix prevents collisions with other data in the same Redis instance.
const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(token: &SessionToken) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, token.as_str())
}
