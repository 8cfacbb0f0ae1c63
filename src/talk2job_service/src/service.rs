use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::{get, post},
};
use talk2job_adapters::{
    config::AllowedOrigins,
    http::{
        gate::session_gate,
        routes::{
            dashboard, forgot_password, interviews, logout, oauth, root, sign_in, sign_in_page,
            sign_up, sign_up_page,
        },
    },
};
use talk2job_core::{IdentityProvider, InterviewStore, SessionStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled Talk2Job auth and session service.
pub struct Talk2JobService {
    router: Router,
}

impl Talk2JobService {
    /// Wire the routes to the provided adapters.
    ///
    /// # Note on Architecture
    /// Adapters implement Clone via internal shared handles. Each route is
    /// given only the state it needs, and the session gate runs over every
    /// route so page handlers can rely on the resolved visitor.
    pub fn new<I, U, S, V>(
        identity_provider: I,
        user_store: U,
        session_store: S,
        interview_store: V,
    ) -> Self
    where
        I: IdentityProvider + Clone + 'static,
        U: UserStore + Clone + 'static,
        S: SessionStore + Clone + 'static,
        V: InterviewStore + Clone + 'static,
    {
        let router = Router::new()
            // Sign-up needs the identity provider and the user store
            .route("/api/auth/sign-up", post(sign_up::<I, U>))
            .with_state((identity_provider.clone(), user_store.clone()))
            // Sign-in verifies credentials, then mints a session
            .route("/api/auth/sign-in", post(sign_in::<I, U, S>))
            .with_state((
                identity_provider.clone(),
                user_store.clone(),
                session_store.clone(),
            ))
            // OAuth completion shares the sign-in state
            .route("/api/auth/oauth", post(oauth::<I, U, S>))
            .with_state((
                identity_provider.clone(),
                user_store.clone(),
                session_store.clone(),
            ))
            // Forgot-password only talks to the identity provider
            .route("/api/auth/forgot-password", post(forgot_password::<I>))
            .with_state(identity_provider)
            // Logout only needs the session store
            .route("/api/auth/logout", post(logout::<S>))
            .with_state(session_store.clone())
            // Pages
            .route("/", get(root))
            .route("/sign-in", get(sign_in_page))
            .route("/sign-up", get(sign_up_page))
            .route("/dashboard", get(dashboard::<V>))
            .with_state(interview_store.clone())
            .route("/interviews", get(interviews::<V>))
            .with_state(interview_store)
            // The gate resolves the session cookie for every request
            .layer(middleware::from_fn_with_state(
                (session_store, user_store),
                session_gate::<S, U>,
            ));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be mounted on another application.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            if !allowed_origins.is_empty() {
                let cors = CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST])
                    .allow_credentials(true)
                    .allow_origin(AllowOrigin::predicate(
                        move |origin: &HeaderValue, _request_parts: &request::Parts| {
                            allowed_origins.contains(origin)
                        },
                    ));

                self.router = self.router.layer(cors);
            }
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server on the given listener.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Talk2Job service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
