use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::UserId;

/// A practice-interview record, read-only from this service's point of
/// view. Listed on the dashboard; created and scored elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interview {
    pub id: Uuid,
    pub user_id: UserId,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    pub fn new(user_id: UserId, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            role: role.into(),
            created_at: Utc::now(),
        }
    }
}
