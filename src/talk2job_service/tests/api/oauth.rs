use secrecy::Secret;
use talk2job_core::{Email, UserId};

use crate::helpers::{TestApp, response_body, session_cookie};

fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

#[tokio::test]
async fn oauth_sign_up_registers_the_user_and_mints_a_session() {
    let app = TestApp::new().await;
    let token = app
        .identity
        .seed_identity("uid-g1", Some(email("ada@gmail.com")), Some("Ada Lovelace"));

    let response = app
        .post_json(
            "/api/auth/oauth",
            &serde_json::json!({ "idToken": token.expose(), "mode": "sign-up" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(session_cookie(&response).is_some());
    assert_eq!(app.users.user_count(), 1);

    let dashboard = app.get("/dashboard").await;
    assert_eq!(dashboard.status().as_u16(), 200);
    let body = response_body(dashboard).await;
    assert_eq!(body["user"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn oauth_sign_up_twice_reuses_the_existing_user() {
    let app = TestApp::new().await;
    let token = app
        .identity
        .seed_identity("uid-g1", Some(email("ada@gmail.com")), Some("Ada Lovelace"));

    for _ in 0..2 {
        let response = app
            .post_json(
                "/api/auth/oauth",
                &serde_json::json!({ "idToken": token.expose(), "mode": "sign-up" }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }

    assert_eq!(app.users.user_count(), 1);
    assert!(!app.identity.was_revoked(&UserId::new("uid-g1")));
}

#[tokio::test]
async fn oauth_sign_in_without_a_user_record_is_rejected_and_revoked() {
    let app = TestApp::new().await;
    let token = app
        .identity
        .seed_identity("uid-g3", Some(email("ghost@gmail.com")), None);

    let response = app
        .post_json(
            "/api/auth/oauth",
            &serde_json::json!({ "idToken": token.expose(), "mode": "sign-in" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response_body(response).await;
    assert_eq!(body["message"], "No account found with this email");
    assert!(app.identity.was_revoked(&UserId::new("uid-g3")));
    assert_eq!(app.sessions.session_count(), 0);
}

#[tokio::test]
async fn oauth_identity_without_an_email_is_rejected_and_revoked() {
    let app = TestApp::new().await;
    let token = app.identity.seed_identity("uid-g2", None, Some("No Email"));

    let response = app
        .post_json(
            "/api/auth/oauth",
            &serde_json::json!({ "idToken": token.expose(), "mode": "sign-up" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response_body(response).await;
    assert_eq!(body["field"], "general");
    assert!(app.identity.was_revoked(&UserId::new("uid-g2")));
}

#[tokio::test]
async fn a_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/auth/oauth",
            &serde_json::json!({ "idToken": "garbage", "mode": "sign-in" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response_body(response).await;
    assert_eq!(body["message"], "Invalid or expired identity token.");
}
