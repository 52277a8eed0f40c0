//! Memoized queries with expiry.
//!
//! Concurrent lookups of the same key share one fetch. Only successful
//! fetches are stored; a failed fetch leaves the slot empty so the next
//! caller tries again.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::OnceCell;
use tracing::trace;

struct Slot<V> {
    value: OnceCell<(V, Instant)>,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            value: OnceCell::new(),
        }
    }
}

impl<V> Slot<V> {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        match self.value.get() {
            Some((_, filled_at)) => now.saturating_duration_since(*filled_at) >= ttl,
            // Still in flight, or the last fetch failed
            None => false,
        }
    }
}

pub struct QueryCache<K, V> {
    ttl: Duration,
    slots: Mutex<HashMap<K, Arc<Slot<V>>>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Arc<Slot<V>>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, key: K) -> Arc<Slot<V>> {
        let now = Instant::now();
        let mut slots = self.lock();
        let slot = slots.entry(key).or_default();
        if slot.is_expired(now, self.ttl) {
            *slot = Arc::default();
        }
        Arc::clone(slot)
    }

    /// Return the cached value, or run `fetch` once for all concurrent callers.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(key.clone());
        let fetched = slot
            .value
            .get_or_try_init(|| async move {
                trace!("Cache miss, fetching");
                fetch().await.map(|v| (v, Instant::now()))
            })
            .await;
        match fetched {
            Ok((value, _)) => Ok(value.clone()),
            Err(e) => {
                self.release_empty(&key, &slot);
                Err(e)
            }
        }
    }

    /// Drop the slot of a failed fetch unless it has been replaced or filled since.
    fn release_empty(&self, key: &K, slot: &Arc<Slot<V>>) {
        let mut slots = self.lock();
        let current = slots.get(key).map_or(false, |s| Arc::ptr_eq(s, slot));
        if current && !slot.value.initialized() {
            slots.remove(key);
        }
    }

    /// The cached value if present and fresh, without fetching.
    #[cfg(test)]
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let slots = self.lock();
        let slot = slots.get(key)?;
        if slot.is_expired(now, self.ttl) {
            return None;
        }
        slot.value.get().map(|(v, _)| v.clone())
    }

    #[cfg(test)]
    pub fn insert(&self, key: K, value: V) {
        let slot = Slot::default();
        // A fresh cell can't be already set
        let _ = slot.value.set((value, Instant::now()));
        self.lock().insert(key, Arc::new(slot));
    }

    pub fn invalidate(&self, key: &K) {
        self.lock().remove(key);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Drop expired entries and abandoned empty slots, returning how many were removed.
    pub fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut slots = self.lock();
        let before = slots.len();
        slots.retain(|_, slot| {
            let abandoned = !slot.value.initialized() && Arc::strong_count(slot) == 1;
            !abandoned && !slot.is_expired(now, self.ttl)
        });
        before - slots.len()
    }

    /// Number of entries holding a value, fresh or not.
    pub fn len(&self) -> usize {
        self.lock()
            .values()
            .filter(|slot| slot.value.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
