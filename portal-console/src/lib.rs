//! Portal Console - client-side core of the marketplace admin dashboard
//!
//! Orchestrates the paginated notifications inbox (optimistic mark-as-read
//! with rollback, bulk mark-all with cache invalidation, unread-count
//! polling) and commission rule management (form population, validation,
//! submission, directory listing and deletion) over an explicit query
//! cache and a typed HTTP client.

pub mod api;
pub mod commission_form;
pub mod commissions;
pub mod error;
pub mod notifications;
pub mod poller;
pub mod profile;
pub mod query_cache;
pub mod services;

pub use api::{CommissionApi, NotificationApi, ReferenceApi};
pub use commission_form::{CommissionRuleForm, FormFields};
pub use commissions::{CommissionDirectory, CommissionPage};
pub use error::{ConsoleError, ConsoleResult};
pub use notifications::{NotificationInbox, NotificationPage};
pub use poller::NotificationPoller;
pub use profile::ProfileHeader;
pub use query_cache::QueryCache;
pub use services::ServiceCatalog;
