//! Data models
//!
//! Shared between the backend API and the admin console. All IDs are
//! opaque server-assigned strings.

pub mod commission_rule;
pub mod notification;
pub mod service;

// Re-exports
pub use commission_rule::*;
pub use notification::*;
pub use service::*;
