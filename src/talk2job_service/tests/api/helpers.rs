use talk2job_adapters::{
    identity::MockIdentityClient,
    persistence::{DashMapInterviewStore, DashMapSessionStore, DashMapUserStore},
};
use talk2job_service::Talk2JobService;

/// A full service instance on an ephemeral port, backed by in-memory
/// adapters and the mock identity provider. The client keeps cookies and
/// never follows redirects, so gate behavior can be asserted directly.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub identity: MockIdentityClient,
    pub users: DashMapUserStore,
    pub sessions: DashMapSessionStore,
    pub interviews: DashMapInterviewStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let identity = MockIdentityClient::new();
        let users = DashMapUserStore::new();
        let sessions = DashMapSessionStore::new();
        let interviews = DashMapInterviewStore::new();

        let service = Talk2JobService::new(
            identity.clone(),
            users.clone(),
            sessions.clone(),
            interviews.clone(),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build test client");

        Self {
            address,
            client,
            identity,
            users,
            sessions,
            interviews,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.post_json(
            "/api/auth/sign-up",
            &serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "termsAccepted": true,
            }),
        )
        .await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> reqwest::Response {
        self.post_json(
            "/api/auth/sign-in",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Sign up and sign in, leaving the session cookie in the client jar.
    pub async fn sign_up_and_in(&self, name: &str, email: &str, password: &str) {
        let response = self.sign_up(name, email, password).await;
        assert_eq!(response.status().as_u16(), 201);
        let response = self.sign_in(email, password).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}

pub fn random_email() -> String {
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    SafeEmail().fake()
}

pub async fn response_body(response: reqwest::Response) -> serde_json::Value {
    response
        .json()
        .await
        .expect("Response body was not valid JSON")
}

pub fn session_cookie<'a>(response: &'a reqwest::Response) -> Option<reqwest::cookie::Cookie<'a>> {
    response.cookies().find(|cookie| cookie.name() == "session")
}
