//! Service catalog controller
//!
//! Read-only list of services offered on the marketplace, fetched for
//! the commission form's applicable-services selection. Never mutated by
//! the console.

use std::sync::Arc;

use shared::models::Service;

use crate::api::ReferenceApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::query_cache::QueryCache;

/// Service catalog controller
pub struct ServiceCatalog {
    api: Arc<dyn ReferenceApi>,
    cache: Arc<QueryCache<(), Vec<Service>>>,
}

impl ServiceCatalog {
    pub fn new(api: Arc<dyn ReferenceApi>, cache: Arc<QueryCache<(), Vec<Service>>>) -> Self {
        Self { api, cache }
    }

    /// All services, fetched once and then served cached
    pub async fn load(&self) -> ConsoleResult<Vec<Service>> {
        let api = Arc::clone(&self.api);
        self.cache
            .get_or_load((), move || {
                let api = Arc::clone(&api);
                async move { api.list_services().await }
            })
            .await
            .map_err(ConsoleError::Remote)
    }
}
