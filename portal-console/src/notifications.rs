//! Notification inbox controller
//!
//! Orchestrates paginated fetches of the notification list, derives the
//! unread count, and applies the two read-flag mutations: optimistic
//! mark-one-read with rollback, and non-optimistic mark-all-read with
//! cache invalidation.

use std::sync::Arc;

use portal_client::Paginated;
use shared::models::Notification;

use crate::api::NotificationApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::query_cache::QueryCache;

/// One cached page of the inbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPage {
    /// 1-based page index
    pub page: u32,
    pub items: Vec<Notification>,
    /// Total page count reported by the backend
    pub pages: u32,
}

impl NotificationPage {
    fn from_response(page: u32, response: Paginated<Notification>) -> Self {
        Self {
            page,
            items: response.items,
            pages: response.pagination.pages,
        }
    }
}

/// Notification inbox controller
///
/// Cheap to share: holds the cache and the API behind `Arc`s; all methods
/// take `&self`.
pub struct NotificationInbox {
    api: Arc<dyn NotificationApi>,
    cache: Arc<QueryCache<u32, NotificationPage>>,
}

impl NotificationInbox {
    pub fn new(api: Arc<dyn NotificationApi>, cache: Arc<QueryCache<u32, NotificationPage>>) -> Self {
        Self { api, cache }
    }

    /// Fetch one 1-based page, replacing the cached entry for that index
    ///
    /// Concurrent loads for different pages do not interfere; concurrent
    /// loads for the same page share one request.
    pub async fn load(&self, page: u32) -> ConsoleResult<NotificationPage> {
        let api = Arc::clone(&self.api);
        self.cache
            .get_or_load(page, move || {
                let api = Arc::clone(&api);
                async move {
                    let response = api.list(page).await?;
                    Ok(NotificationPage::from_response(page, response))
                }
            })
            .await
            .map_err(ConsoleError::Remote)
    }

    /// Drop the cached entry for `page` and fetch it again
    ///
    /// Used by the poller; an identical in-flight load is joined rather
    /// than duplicated.
    pub async fn refresh(&self, page: u32) -> ConsoleResult<NotificationPage> {
        self.cache.invalidate(&page).await;
        self.load(page).await
    }

    /// Count of unread notifications in the cached page
    ///
    /// Pure derivation over the cache; zero when the page is not cached.
    pub async fn unread_count(&self, page: u32) -> usize {
        match self.cache.get(&page).await {
            Some(cached) => cached.items.iter().filter(|n| !n.is_read).count(),
            None => 0,
        }
    }

    /// Mark one notification as read, optimistically
    ///
    /// The cached flag flips before the remote call resolves. On remote
    /// failure the page snapshot taken just before the flip is restored
    /// and the error is surfaced; on success remote state already matches.
    pub async fn mark_as_read(&self, page: u32, id: &str) -> ConsoleResult<()> {
        let prior = self
            .cache
            .update(&page, |cached| {
                if let Some(n) = cached.items.iter_mut().find(|n| n.id == id) {
                    n.is_read = true;
                }
            })
            .await;

        match self.api.mark_read(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                if let Some(snapshot) = prior {
                    self.cache.restore(page, snapshot).await;
                }
                tracing::warn!(id = %id, error = %e, "mark-as-read failed, rolled back");
                Err(ConsoleError::Remote(e))
            }
        }
    }

    /// Mark every notification as read
    ///
    /// Not optimistic: the bulk request goes first, and only on success is
    /// every cached page invalidated so the next access refetches. On
    /// failure nothing changes locally.
    pub async fn mark_all_as_read(&self) -> ConsoleResult<()> {
        self.api.mark_all_read().await.map_err(ConsoleError::Remote)?;
        self.cache.invalidate_all().await;
        tracing::debug!("all notifications marked read, pages invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use portal_client::{ClientError, ClientResult, Pagination};
    use shared::models::NotificationKind;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            sender: None,
            receiver: None,
            title: None,
            message: format!("message for {}", id),
            kind: NotificationKind::System,
            is_read,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap(),
        }
    }

    /// Fake backend: a page of notifications plus switches for failure
    /// modes and a gate to hold mark-read calls in flight.
    struct FakeApi {
        items: Mutex<Vec<Notification>>,
        list_calls: AtomicUsize,
        fail_mark_read: AtomicBool,
        fail_mark_all: AtomicBool,
        mark_read_gate: tokio::sync::Semaphore,
    }

    impl FakeApi {
        fn with_items(items: Vec<Notification>) -> Self {
            Self {
                items: Mutex::new(items),
                list_calls: AtomicUsize::new(0),
                fail_mark_read: AtomicBool::new(false),
                fail_mark_all: AtomicBool::new(false),
                // Open by default; gated constructor closes it.
                mark_read_gate: tokio::sync::Semaphore::new(tokio::sync::Semaphore::MAX_PERMITS),
            }
        }

        /// Like `with_items`, but mark-read calls stay suspended until the
        /// test adds permits to the gate.
        fn with_items_gated(items: Vec<Notification>) -> Self {
            Self {
                mark_read_gate: tokio::sync::Semaphore::new(0),
                ..Self::with_items(items)
            }
        }
    }

    #[async_trait]
    impl NotificationApi for FakeApi {
        async fn list(&self, page: u32) -> ClientResult<Paginated<Notification>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            let items = self.items.lock().await.clone();
            let total = items.len() as u64;
            Ok(Paginated {
                items,
                pagination: Pagination::new(page, 10, total),
            })
        }

        async fn mark_read(&self, id: &str) -> ClientResult<()> {
            let _permit = self
                .mark_read_gate
                .acquire()
                .await
                .map_err(|_| ClientError::Internal("gate closed".to_string()))?;
            if self.fail_mark_read.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("backend unavailable".to_string()));
            }
            let mut items = self.items.lock().await;
            if let Some(n) = items.iter_mut().find(|n| n.id == id) {
                n.is_read = true;
            }
            Ok(())
        }

        async fn mark_all_read(&self) -> ClientResult<()> {
            if self.fail_mark_all.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("backend unavailable".to_string()));
            }
            let mut items = self.items.lock().await;
            for n in items.iter_mut() {
                n.is_read = true;
            }
            Ok(())
        }
    }

    fn inbox_with(api: Arc<FakeApi>) -> NotificationInbox {
        NotificationInbox::new(api, Arc::new(QueryCache::new()))
    }

    #[tokio::test]
    async fn unread_count_matches_loaded_items() {
        let api = Arc::new(FakeApi::with_items(vec![
            notification("a", false),
            notification("b", true),
            notification("c", false),
        ]));
        let inbox = inbox_with(Arc::clone(&api));

        let page = inbox.load(1).await.unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(inbox.unread_count(1).await, 2);
    }

    #[tokio::test]
    async fn unread_count_is_zero_for_uncached_page() {
        let api = Arc::new(FakeApi::with_items(vec![notification("a", false)]));
        let inbox = inbox_with(api);
        assert_eq!(inbox.unread_count(7).await, 0);
    }

    #[tokio::test]
    async fn repeated_loads_are_served_from_cache() {
        let api = Arc::new(FakeApi::with_items(vec![notification("a", false)]));
        let inbox = inbox_with(Arc::clone(&api));

        inbox.load(1).await.unwrap();
        inbox.load(1).await.unwrap();
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn mark_as_read_is_visible_before_remote_resolution() {
        let api = Arc::new(FakeApi::with_items_gated(vec![
            notification("a", false),
            notification("b", false),
        ]));
        let inbox = Arc::new(inbox_with(Arc::clone(&api)));
        inbox.load(1).await.unwrap();

        let pending = {
            let inbox = Arc::clone(&inbox);
            tokio::spawn(async move { inbox.mark_as_read(1, "a").await })
        };

        // The remote call is suspended on the gate, but the cached flag
        // has already flipped.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(inbox.unread_count(1).await, 1);

        api.mark_read_gate.add_permits(1);
        pending.await.unwrap().unwrap();
        assert_eq!(inbox.unread_count(1).await, 1);
    }

    #[tokio::test]
    async fn failed_mark_as_read_rolls_back_to_the_prior_snapshot() {
        let api = Arc::new(FakeApi::with_items(vec![
            notification("a", false),
            notification("b", true),
        ]));
        let inbox = inbox_with(Arc::clone(&api));
        inbox.load(1).await.unwrap();

        let before = inbox.load(1).await.unwrap();
        api.fail_mark_read.store(true, Ordering::SeqCst);

        let err = inbox.mark_as_read(1, "a").await.unwrap_err();
        assert!(matches!(err, ConsoleError::Remote(_)));

        // Bit-identical to the cache before the call was issued.
        let after = inbox.load(1).await.unwrap();
        assert_eq!(after, before);
        assert_eq!(inbox.unread_count(1).await, 1);
    }

    #[tokio::test]
    async fn concurrent_marks_on_one_page_compose() {
        let api = Arc::new(FakeApi::with_items_gated(vec![
            notification("a", false),
            notification("b", false),
        ]));
        let inbox = Arc::new(inbox_with(Arc::clone(&api)));
        inbox.load(1).await.unwrap();

        let mark = |id: &'static str| {
            let inbox = Arc::clone(&inbox);
            tokio::spawn(async move { inbox.mark_as_read(1, id).await })
        };
        let first = mark("a");
        let second = mark("b");

        // Both remote calls are suspended; each optimistic write applied
        // against the then-current snapshot, so neither clobbered the other.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(inbox.unread_count(1).await, 0);

        api.mark_read_gate.add_permits(2);
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();
        assert_eq!(inbox.unread_count(1).await, 0);
    }

    #[tokio::test]
    async fn mark_all_as_read_invalidates_every_cached_page() {
        let api = Arc::new(FakeApi::with_items(vec![
            notification("a", false),
            notification("b", false),
        ]));
        let inbox = inbox_with(Arc::clone(&api));

        inbox.load(1).await.unwrap();
        inbox.load(2).await.unwrap();
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);

        inbox.mark_all_as_read().await.unwrap();

        // Next access refetches rather than serving stale pages.
        let page = inbox.load(1).await.unwrap();
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 3);
        assert!(page.items.iter().all(|n| n.is_read));
        inbox.load(2).await.unwrap();
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn failed_mark_all_changes_nothing_locally() {
        let api = Arc::new(FakeApi::with_items(vec![notification("a", false)]));
        let inbox = inbox_with(Arc::clone(&api));
        let before = inbox.load(1).await.unwrap();

        api.fail_mark_all.store(true, Ordering::SeqCst);
        let err = inbox.mark_all_as_read().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Remote(_)));

        // Still served from cache, still unchanged.
        assert_eq!(inbox.load(1).await.unwrap(), before);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(inbox.unread_count(1).await, 1);
    }
}
