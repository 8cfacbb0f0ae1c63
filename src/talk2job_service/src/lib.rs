mod helpers;
mod service;
mod tracing;

pub use helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client};
pub use service::Talk2JobService;
pub use tracing::init_tracing;
