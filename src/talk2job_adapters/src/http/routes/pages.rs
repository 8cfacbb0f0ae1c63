//! Page handlers. The frontend is a separate single-page app, so pages are
//! served as JSON view models rather than rendered HTML; the routing and
//! gating semantics are what matter here.

use axum::{Json, extract::State, response::{IntoResponse, Redirect, Response}};
use serde_json::json;
use talk2job_application::DashboardUseCase;
use talk2job_core::InterviewStore;

use crate::http::gate::{AuthenticatedUser, MaybeUser};

/// Landing page. Signed-in visitors go straight to their dashboard.
#[tracing::instrument(name = "Root page", skip_all)]
pub async fn root(MaybeUser(user): MaybeUser) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    Json(json!({
        "page": "home",
        "headline": "Practice job interviews with an AI interviewer",
        "authenticated": false,
    }))
    .into_response()
}

#[tracing::instrument(name = "Dashboard page", skip_all)]
pub async fn dashboard<V>(
    State(interview_store): State<V>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> impl IntoResponse
where
    V: InterviewStore + Clone + 'static,
{
    let listing = DashboardUseCase::new(interview_store).execute(user.id()).await;

    Json(json!({
        "page": "dashboard",
        "user": { "id": user.id(), "name": user.name() },
        "userInterviews": listing.user_interviews,
        "latestInterviews": listing.latest_interviews,
    }))
}

#[tracing::instrument(name = "Interviews page", skip_all)]
pub async fn interviews<V>(
    State(interview_store): State<V>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> impl IntoResponse
where
    V: InterviewStore + Clone + 'static,
{
    let interviews = interview_store
        .interviews_for_user(user.id())
        .await
        .unwrap_or_default();

    Json(json!({
        "page": "interviews",
        "user": { "id": user.id(), "name": user.name() },
        "interviews": interviews,
    }))
}

/// Sign-in page. Served to everyone; an already-signed-in visitor may want
/// to re-authenticate as someone else, so there is no redirect here.
#[tracing::instrument(name = "Sign-in page", skip_all)]
pub async fn sign_in_page(MaybeUser(user): MaybeUser) -> impl IntoResponse {
    Json(json!({
        "page": "sign-in",
        "authenticated": user.is_some(),
    }))
}

#[tracing::instrument(name = "Sign-up page", skip_all)]
pub async fn sign_up_page(MaybeUser(user): MaybeUser) -> impl IntoResponse {
    Json(json!({
        "page": "sign-up",
        "authenticated": user.is_some(),
    }))
}
