pub mod http_identity_client;
pub mod mock_identity_client;

pub use http_identity_client::HttpIdentityClient;
pub use mock_identity_client::MockIdentityClient;
