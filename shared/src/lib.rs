//! Shared types for the marketplace admin portal
//!
//! Data-transfer types crossing the API boundary: domain models,
//! the response envelope and pagination metadata. Everything here is
//! a validated `serde` type; the client rejects responses that do not
//! decode into these shapes.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::UserProfile;
pub use response::{ApiResponse, Paginated, Pagination, API_CODE_SUCCESS};
