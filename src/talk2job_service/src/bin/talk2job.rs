use std::sync::Arc;

use reqwest::Client as HttpClient;
use talk2job_adapters::{
    config::Settings,
    identity::HttpIdentityClient,
    persistence::{DashMapInterviewStore, PostgresUserStore, RedisSessionStore},
};
use talk2job_service::{Talk2JobService, configure_postgresql, configure_redis, init_tracing};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let settings = Settings::load();

    let pg_pool = configure_postgresql().await;
    let redis_conn = Arc::new(Mutex::new(configure_redis()));

    let user_store = PostgresUserStore::new(pg_pool);
    let session_store = RedisSessionStore::new(redis_conn, settings.session.ttl_seconds as u64);
    // Interview listings are still served in-process until the interview
    // service grows its own storage.
    let interview_store = DashMapInterviewStore::new();

    let http_client = HttpClient::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let identity_provider = HttpIdentityClient::new(
        settings.identity.base_url.clone(),
        settings.identity.api_key.clone(),
        http_client,
    );

    let service = Talk2JobService::new(
        identity_provider,
        user_store,
        session_store,
        interview_store,
    );

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;
    service
        .run_standalone(listener, Some(settings.app.allowed_origins.clone()))
        .await?;

    Ok(())
}
