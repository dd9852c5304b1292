use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::OnceCell;

/// Key a cached query is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(pub &'static str);

/// When cached results are thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Invalidation {
    /// Results live as long as the cache itself
    #[default]
    Never,
}

type Slot<T> = Arc<OnceCell<Arc<T>>>;

/// Explicit query result cache
///
/// Scoped to whoever owns it (the application instance owns one for the
/// lifetime of the window). Cloning shares the same entries.
///
/// - At most one load runs per key; concurrent callers wait for it
/// - Successful results are kept according to the [`Invalidation`] policy
/// - Failures are not cached, the next caller loads again
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: Arc<Mutex<HashMap<QueryKey, Slot<T>>>>,
    policy: Invalidation,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            policy: self.policy,
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new(Invalidation::Never)
    }
}

impl<T> QueryCache<T> {
    pub fn new(policy: Invalidation) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            policy,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Slot<T>>> {
        // A panic while holding the lock cannot leave the map half-written
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn slot(&self, key: QueryKey) -> Slot<T> {
        Arc::clone(self.lock().entry(key).or_default())
    }

    /// Cached value for `key`, if a load has completed successfully
    pub fn get(&self, key: QueryKey) -> Option<Arc<T>> {
        self.lock().get(&key).and_then(|slot| slot.get().cloned())
    }

    /// Return the cached value or run `loader` to produce it
    pub async fn get_or_load<F, Fut, E>(&self, key: QueryKey, loader: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get(key) {
            log::debug!("Query cache hit for {:?} (invalidation {:?})", key, self.policy);
            return Ok(hit);
        }

        let slot = self.slot(key);
        let value = slot
            .get_or_try_init(|| async move { loader().await.map(Arc::new) })
            .await?;

        Ok(Arc::clone(value))
    }
}
