//! Commission rule directory controller
//!
//! Backs the paginated rules table: cached page loads and deletion. The
//! actual delete confirmation dialog belongs to the presentation layer;
//! this controller is only called once the user has confirmed.

use std::sync::Arc;

use portal_client::Paginated;
use shared::models::CommissionRule;

use crate::api::CommissionApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::query_cache::QueryCache;

/// One cached page of the rules table
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionPage {
    /// 1-based page index
    pub page: u32,
    pub items: Vec<CommissionRule>,
    /// Total page count reported by the backend
    pub pages: u32,
}

impl CommissionPage {
    fn from_response(page: u32, response: Paginated<CommissionRule>) -> Self {
        Self {
            page,
            items: response.items,
            pages: response.pagination.pages,
        }
    }
}

/// Commission rule directory controller
pub struct CommissionDirectory {
    api: Arc<dyn CommissionApi>,
    cache: Arc<QueryCache<u32, CommissionPage>>,
}

impl CommissionDirectory {
    pub fn new(api: Arc<dyn CommissionApi>, cache: Arc<QueryCache<u32, CommissionPage>>) -> Self {
        Self { api, cache }
    }

    /// Fetch one 1-based page of rules, cached per page index
    pub async fn load(&self, page: u32) -> ConsoleResult<CommissionPage> {
        let api = Arc::clone(&self.api);
        self.cache
            .get_or_load(page, move || {
                let api = Arc::clone(&api);
                async move {
                    let response = api.list(page).await?;
                    Ok(CommissionPage::from_response(page, response))
                }
            })
            .await
            .map_err(ConsoleError::Remote)
    }

    /// Delete a rule after user confirmation
    ///
    /// On success every cached page is invalidated so the table refetches;
    /// on failure nothing changes locally.
    pub async fn delete(&self, id: &str) -> ConsoleResult<()> {
        self.api.delete(id).await.map_err(ConsoleError::Remote)?;
        self.cache.invalidate_all().await;
        tracing::debug!(id = %id, "commission rule deleted, list invalidated");
        Ok(())
    }
}
