//! Portal Client - HTTP client for the Marketplace API
//!
//! Provides typed, envelope-aware HTTP calls to the backend REST API
//! consumed by the admin console: notifications, commission rules,
//! services and the current user profile.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::UserProfile;
pub use shared::response::{ApiResponse, Paginated, Pagination};
