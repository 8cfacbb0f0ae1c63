//! # Talk2Job - Auth and Session Service Library
//!
//! This is a facade crate that re-exports all public APIs from the Talk2Job
//! service components. Use this crate to get access to the full auth and
//! session functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! talk2job = { path = "../talk2job" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `UserName`, `Session`, etc.
//! - **Repository traits**: `UserStore`, `SessionStore`, `InterviewStore`
//! - **Use cases**: `SignUpUseCase`, `EstablishSessionUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `RedisSessionStore`, `HttpIdentityClient`, etc.
//! - **Service**: `Talk2JobService` - The main entry point for the service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use talk2job_core::*;
}

// Re-export most commonly used core types at the root level
pub use talk2job_core::{
    Email, FormField, IdToken, Identity, Interview, Password, ProviderCode, Session, SessionToken,
    User, UserId, UserName, ValidationError, VerifiedIdentity,
};

// ============================================================================
// Repository and Service Traits (Ports)
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use talk2job_core::{
        IdentityError, IdentityProvider, InterviewStore, InterviewStoreError, SessionStore,
        SessionStoreError, UserStore, UserStoreError,
    };
}

// Re-export port traits at root level
pub use talk2job_core::{
    IdentityError, IdentityProvider, InterviewStore, InterviewStoreError, SessionStore,
    SessionStoreError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use talk2job_application::*;
}

// Re-export use cases at root level
pub use talk2job_application::{
    CurrentUserUseCase, DashboardUseCase, EndSessionUseCase, EstablishSessionUseCase, OAuthMode,
    OAuthSignInUseCase, PasswordResetUseCase, SignUpUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, cookies, and the session gate
    pub mod http {
        pub use talk2job_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use talk2job_adapters::persistence::*;
    }

    /// Identity provider clients
    pub mod identity {
        pub use talk2job_adapters::identity::*;
    }

    /// Configuration
    pub mod config {
        pub use talk2job_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use talk2job_adapters::{
    identity::{HttpIdentityClient, MockIdentityClient},
    persistence::{
        DashMapInterviewStore, DashMapSessionStore, DashMapUserStore, PostgresUserStore,
        RedisSessionStore,
    },
};

// ============================================================================
// Talk2Job Service (Main Entry Point)
// ============================================================================

/// Main service
pub use talk2job_service::{
    Talk2JobService, configure_postgresql, configure_redis, get_redis_client, init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
