use talk2job_core::{Interview, InterviewStore, UserId};

/// How many community interviews the dashboard shows.
const LATEST_INTERVIEWS_LIMIT: usize = 20;

/// The two independent listings the dashboard renders.
#[derive(Debug, Default, PartialEq)]
pub struct DashboardListing {
    pub user_interviews: Vec<Interview>,
    pub latest_interviews: Vec<Interview>,
}

/// Dashboard use case - fetches the user's own interviews and the latest
/// community interviews concurrently. The two reads are independent; a
/// failed read degrades to an empty list rather than failing the page.
pub struct DashboardUseCase<V>
where
    V: InterviewStore,
{
    interview_store: V,
}

impl<V> DashboardUseCase<V>
where
    V: InterviewStore,
{
    pub fn new(interview_store: V) -> Self {
        Self { interview_store }
    }

    #[tracing::instrument(name = "DashboardUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId) -> DashboardListing {
        let (user_interviews, latest_interviews) = tokio::join!(
            self.interview_store.interviews_for_user(user_id),
            self.interview_store
                .latest_interviews(user_id, LATEST_INTERVIEWS_LIMIT),
        );

        DashboardListing {
            user_interviews: user_interviews.unwrap_or_default(),
            latest_interviews: latest_interviews.unwrap_or_default(),
        }
    }
}
