pub mod settings;

pub use settings::{AllowedOrigins, AppEnvironment, Settings};
