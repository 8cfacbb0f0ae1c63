pub mod dashmap_interview_store;
pub mod dashmap_session_store;
pub mod dashmap_user_store;
pub mod postgres_user_store;
pub mod redis_session_store;

pub use dashmap_interview_store::DashMapInterviewStore;
pub use dashmap_session_store::DashMapSessionStore;
pub use dashmap_user_store::DashMapUserStore;
pub use postgres_user_store::PostgresUserStore;
pub use redis_session_store::RedisSessionStore;
