use crate::helpers::{TestApp, random_email, response_body};

#[tokio::test]
async fn anonymous_visitors_are_redirected_from_gated_pages() {
    let app = TestApp::new().await;

    for path in ["/dashboard", "/interviews"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 303, "path: {path}");
        assert_eq!(response.headers().get("location").unwrap(), "/sign-in");
    }
}

#[tokio::test]
async fn the_landing_page_is_public() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response_body(response).await;
    assert_eq!(body["page"], "home");
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn signed_in_visitors_land_on_the_dashboard() {
    let app = TestApp::new().await;
    app.sign_up_and_in("Ada Lovelace", &random_email(), "Passw0rd").await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("location").unwrap(), "/dashboard");
}

#[tokio::test]
async fn auth_pages_stay_reachable_while_signed_in() {
    let app = TestApp::new().await;
    app.sign_up_and_in("Ada Lovelace", &random_email(), "Passw0rd").await;

    for path in ["/sign-in", "/sign-up"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "path: {path}");
        let body = response_body(response).await;
        assert_eq!(body["authenticated"], true);
    }
}

#[tokio::test]
async fn a_tampered_cookie_is_treated_as_anonymous() {
    let app = TestApp::new().await;

    let response = app
        .client
        .get(format!("{}/dashboard", app.address))
        .header("cookie", "session=forged-token-value")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("location").unwrap(), "/sign-in");
}
