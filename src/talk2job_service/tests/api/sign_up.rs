use crate::helpers::{TestApp, random_email, response_body};

#[tokio::test]
async fn sign_up_creates_the_account_and_the_user_record() {
    let app = TestApp::new().await;
    let email = random_email();

    let response = app.sign_up("Ada Lovelace", &email, "Passw0rd").await;

    assert_eq!(response.status().as_u16(), 201);
    let body = response_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Account created successfully. Please sign in.");
    assert_eq!(app.identity.account_count(), 1);
    assert_eq!(app.users.user_count(), 1);
}

#[tokio::test]
async fn unaccepted_terms_are_rejected_before_anything_else() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/auth/sign-up",
            &serde_json::json!({
                "name": "Ada Lovelace",
                "email": "not-an-email",
                "password": "short",
                "termsAccepted": false,
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["field"], "general");
    assert_eq!(
        body["message"],
        "You must accept the terms of service to create an account."
    );
    assert_eq!(app.identity.account_count(), 0);
}

#[tokio::test]
async fn invalid_email_is_rejected_on_the_email_field() {
    let app = TestApp::new().await;

    let response = app.sign_up("Ada Lovelace", "not-an-email", "Passw0rd").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response_body(response).await;
    assert_eq!(body["field"], "email");
    assert_eq!(app.identity.account_count(), 0);
}

#[tokio::test]
async fn weak_password_is_rejected_on_the_password_field() {
    let app = TestApp::new().await;

    let response = app.sign_up("Ada Lovelace", &random_email(), "password").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response_body(response).await;
    assert_eq!(body["field"], "password");
    assert_eq!(
        body["message"],
        "Password must be at least 8 characters and include an uppercase letter and a digit."
    );
    assert_eq!(app.identity.account_count(), 0);
}

#[tokio::test]
async fn short_name_is_rejected_on_the_name_field() {
    let app = TestApp::new().await;

    let response = app.sign_up("Al", &random_email(), "Passw0rd").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response_body(response).await;
    assert_eq!(body["field"], "name");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = TestApp::new().await;
    let email = random_email();

    let first = app.sign_up("Ada Lovelace", &email, "Passw0rd").await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.sign_up("Grace Hopper", &email, "Passw0rd").await;

    assert_eq!(second.status().as_u16(), 409);
    let body = response_body(second).await;
    assert_eq!(body["field"], "email");
    assert_eq!(
        body["message"],
        "An account already exists with this email address."
    );
    assert_eq!(app.users.user_count(), 1);
}
