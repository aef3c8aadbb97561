//! Profile header controller
//!
//! Fetches the current user's profile for the dashboard header. Cached
//! under a unit key so repeated header renders share one request.

use std::sync::Arc;

use shared::client::UserProfile;

use crate::api::ReferenceApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::query_cache::QueryCache;

/// Profile header controller
pub struct ProfileHeader {
    api: Arc<dyn ReferenceApi>,
    cache: Arc<QueryCache<(), UserProfile>>,
}

impl ProfileHeader {
    pub fn new(api: Arc<dyn ReferenceApi>, cache: Arc<QueryCache<(), UserProfile>>) -> Self {
        Self { api, cache }
    }

    /// The current user's profile, fetched once and then served cached
    pub async fn load(&self) -> ConsoleResult<UserProfile> {
        let api = Arc::clone(&self.api);
        self.cache
            .get_or_load((), move || {
                let api = Arc::clone(&api);
                async move { api.current_profile().await }
            })
            .await
            .map_err(ConsoleError::Remote)
    }
}
