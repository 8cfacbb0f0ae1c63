use std::sync::Arc;

use dashmap::DashMap;
use talk2job_core::{Interview, InterviewStore, InterviewStoreError, UserId};
use uuid::Uuid;

/// In-memory interview listings for local runs and tests.
#[derive(Clone, Default)]
pub struct DashMapInterviewStore {
    interviews: Arc<DashMap<Uuid, Interview>>,
}

impl DashMapInterviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, interview: Interview) {
        self.interviews.insert(interview.id, interview);
    }
}

#[async_trait::async_trait]
impl InterviewStore for DashMapInterviewStore {
    async fn interviews_for_user(
        &self,
        user: &UserId,
    ) -> Result<Vec<Interview>, InterviewStoreError> {
        let mut interviews: Vec<Interview> = self
            .interviews
            .iter()
            .filter(|entry| &entry.value().user_id == user)
            .map(|entry| entry.value().clone())
            .collect();
        interviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(interviews)
    }

    async fn latest_interviews(
        &self,
        exclude_user: &UserId,
        limit: usize,
    ) -> Result<Vec<Interview>, InterviewStoreError> {
        let mut interviews: Vec<Interview> = self
            .interviews
            .iter()
            .filter(|entry| &entry.value().user_id != exclude_user)
            .map(|entry| entry.value().clone())
            .collect();
        interviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        interviews.truncate(limit);
        Ok(interviews)
    }
}
