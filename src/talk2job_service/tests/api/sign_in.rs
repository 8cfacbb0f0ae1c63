use crate::helpers::{TestApp, random_email, response_body, session_cookie};

#[tokio::test]
async fn sign_in_sets_a_session_cookie_and_unlocks_the_dashboard() {
    let app = TestApp::new().await;
    let email = random_email();
    let response = app.sign_up("Ada Lovelace", &email, "Passw0rd").await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.sign_in(&email, "Passw0rd").await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = session_cookie(&response).expect("no session cookie was set");
    assert!(cookie.http_only());
    assert!(!cookie.value().is_empty());
    assert_eq!(app.sessions.session_count(), 1);

    let dashboard = app.get("/dashboard").await;
    assert_eq!(dashboard.status().as_u16(), 200);
    let body = response_body(dashboard).await;
    assert_eq!(body["page"], "dashboard");
    assert_eq!(body["user"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn unknown_email_is_unauthorized_on_the_email_field() {
    let app = TestApp::new().await;

    let response = app.sign_in(&random_email(), "Passw0rd").await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response_body(response).await;
    assert_eq!(body["field"], "email");
    assert_eq!(body["message"], "No account found with this email");
    assert_eq!(app.sessions.session_count(), 0);
}

#[tokio::test]
async fn wrong_password_is_unauthorized_on_the_password_field() {
    let app = TestApp::new().await;
    let email = random_email();
    app.sign_up("Ada Lovelace", &email, "Passw0rd").await;

    let response = app.sign_in(&email, "Wr0ngPassword").await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response_body(response).await;
    assert_eq!(body["field"], "password");
    assert_eq!(app.sessions.session_count(), 0);
}

#[tokio::test]
async fn malformed_email_never_reaches_the_provider() {
    let app = TestApp::new().await;

    let response = app.sign_in("not-an-email", "Passw0rd").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response_body(response).await;
    assert_eq!(body["field"], "email");
}
