use secrecy::Secret;
use talk2job_core::{Email, Interview, UserId, UserStore};

use crate::helpers::{TestApp, random_email, response_body};

#[tokio::test]
async fn the_dashboard_lists_own_and_community_interviews() {
    let app = TestApp::new().await;
    let email = random_email();
    app.sign_up_and_in("Ada Lovelace", &email, "Passw0rd").await;

    let user = app
        .users
        .get_user_by_email(&Email::try_from(Secret::from(email)).unwrap())
        .await
        .unwrap();

    app.interviews
        .seed(Interview::new(user.id().clone(), "Backend Engineer"));
    app.interviews
        .seed(Interview::new(UserId::new("someone-else"), "Data Scientist"));

    let response = app.get("/dashboard").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response_body(response).await;
    assert_eq!(body["userInterviews"].as_array().unwrap().len(), 1);
    assert_eq!(body["userInterviews"][0]["role"], "Backend Engineer");
    assert_eq!(body["latestInterviews"].as_array().unwrap().len(), 1);
    assert_eq!(body["latestInterviews"][0]["role"], "Data Scientist");
}

#[tokio::test]
async fn the_interviews_page_lists_only_the_visitors_interviews() {
    let app = TestApp::new().await;
    let email = random_email();
    app.sign_up_and_in("Ada Lovelace", &email, "Passw0rd").await;

    app.interviews
        .seed(Interview::new(UserId::new("someone-else"), "Data Scientist"));

    let response = app.get("/interviews").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response_body(response).await;
    assert_eq!(body["page"], "interviews");
    assert_eq!(body["interviews"].as_array().unwrap().len(), 0);
}
