//! QueryCache - keyed snapshot cache for remote query results
//!
//! An explicit cache service object handed to controllers by reference.
//! Supports optimistic writes with rollback snapshots, invalidation, and
//! de-duplication of in-flight loads for an identical key.
//!
//! All mutations happen inside one lock scope, so they are atomic between
//! await points; ordering per key is last-resolved-wins.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

struct CacheState<K, V> {
    entries: HashMap<K, V>,
    /// Loads registered under a key currently being fetched; waiters park
    /// on the Notify and re-check the cache when the leader finishes.
    inflight: HashMap<K, Arc<Notify>>,
    /// Bumped by `invalidate_all`; a load that started under an older
    /// generation is discarded when it resolves.
    generation: u64,
}

/// Keyed snapshot cache
pub struct QueryCache<K, V> {
    state: Mutex<CacheState<K, V>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                inflight: HashMap::new(),
                generation: 0,
            }),
        }
    }

    /// Clone of the cached snapshot for `key`, if any
    pub async fn get(&self, key: &K) -> Option<V> {
        self.state.lock().await.entries.get(key).cloned()
    }

    /// Return the cached snapshot or run `loader` to populate it
    ///
    /// Concurrent calls for the same key are coalesced: one loader runs
    /// and the rest wait for its outcome. A load that resolves after
    /// `invalidate_all` is returned to its caller but not written back.
    pub async fn get_or_load<E, F, Fut>(&self, key: K, loader: F) -> Result<V, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        loop {
            let leader_generation = {
                let mut state = self.state.lock().await;
                if let Some(v) = state.entries.get(&key) {
                    return Ok(v.clone());
                }
                if let Some(notify) = state.inflight.get(&key) {
                    // Another load is in flight; park until it settles,
                    // then re-check. The Notified future is created before
                    // the lock is released so the wakeup cannot be missed.
                    let notify = Arc::clone(notify);
                    let parked = notify.notified();
                    drop(state);
                    parked.await;
                    continue;
                }
                state.inflight.insert(key.clone(), Arc::new(Notify::new()));
                state.generation
            };

            // This call is the leader; the lock is not held across the load.
            let result = loader().await;

            let notify = {
                let mut state = self.state.lock().await;
                let notify = state.inflight.remove(&key);
                if let Ok(v) = &result {
                    if state.generation == leader_generation {
                        state.entries.insert(key.clone(), v.clone());
                    } else {
                        tracing::debug!("discarding load that resolved after invalidation");
                    }
                }
                notify
            };

            if let Some(notify) = notify {
                notify.notify_waiters();
            }
            return result;
        }
    }

    /// Apply `f` to the current cached value, returning the prior snapshot
    ///
    /// The closure sees the cache's state at apply time, never a stale
    /// capture, so concurrent optimistic writes compose. Returns `None`
    /// (and does nothing) when the key is not cached.
    pub async fn update<F>(&self, key: &K, f: F) -> Option<V>
    where
        F: FnOnce(&mut V),
    {
        let mut state = self.state.lock().await;
        let entry = state.entries.get_mut(key)?;
        let prior = entry.clone();
        f(entry);
        Some(prior)
    }

    /// Put back a snapshot previously returned by [`Self::update`]
    pub async fn restore(&self, key: K, snapshot: V) {
        self.state.lock().await.entries.insert(key, snapshot);
    }

    /// Drop the entry for `key` so the next access refetches
    ///
    /// An in-flight load for the key is left alone; a caller arriving
    /// after this still coalesces with it.
    pub async fn invalidate(&self, key: &K) {
        self.state.lock().await.entries.remove(key);
    }

    /// Drop every entry and discard in-flight loads when they resolve
    pub async fn invalidate_all(&self) {
        let mut state = self.state.lock().await;
        state.entries.clear();
        state.generation += 1;
        tracing::debug!(generation = state.generation, "cache invalidated");
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.entries.is_empty()
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
