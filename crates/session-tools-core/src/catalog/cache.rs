//! Keyed memoization of catalog fetches with in-flight de-duplication

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use super::error::CatalogResult;

type SharedFetch<T> = Shared<BoxFuture<'static, CatalogResult<Arc<Vec<T>>>>>;

enum Entry<T> {
    InFlight(SharedFetch<T>),
    Ready(Arc<Vec<T>>),
}

/// Cache of list fetches keyed by string
///
/// For a given key at most one fetch is in flight: callers arriving while
/// it runs await the same shared future. Successful results are kept until
/// invalidated. A failure reaches every waiting caller, then the entry is
/// dropped so the next call fetches again.
pub struct CatalogCache<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T> Default for CatalogCache<T> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> CatalogCache<T>
where
    T: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, joining or starting a fetch as needed
    ///
    /// `fetch` is only called when nothing is cached or in flight.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> CatalogResult<Arc<Vec<T>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CatalogResult<Vec<T>>> + Send + 'static,
    {
        let shared = {
            let mut entries = self.entries.lock();
            let existing = match entries.get(key) {
                Some(Entry::Ready(value)) => return Ok(Arc::clone(value)),
                Some(Entry::InFlight(pending)) => Some(pending.clone()),
                None => None,
            };
            match existing {
                Some(pending) => pending,
                None => {
                    let pending: SharedFetch<T> = fetch().map(|r| r.map(Arc::new)).boxed().shared();
                    entries.insert(key.to_string(), Entry::InFlight(pending.clone()));
                    pending
                }
            }
        };

        let result = shared.clone().await;

        // Only the fetch still registered under `key` may settle it; a newer
        // one started after `invalidate` keeps its slot.
        let mut entries = self.entries.lock();
        let owns_slot = matches!(
            entries.get(key),
            Some(Entry::InFlight(pending)) if pending.ptr_eq(&shared)
        );
        if owns_slot {
            match &result {
                Ok(value) => {
                    entries.insert(key.to_string(), Entry::Ready(Arc::clone(value)));
                }
                Err(_) => {
                    entries.remove(key);
                }
            }
        }
        result
    }

    /// Cached value for `key`, without fetching
    pub fn peek(&self, key: &str) -> Option<Arc<Vec<T>>> {
        match self.entries.lock().get(key) {
            Some(Entry::Ready(value)) => Some(Arc::clone(value)),
            _ => None,
        }
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        matches!(self.entries.lock().get(key), Some(Entry::InFlight(_)))
    }

    /// Forget `key`; the next call fetches again
    pub fn invalidate(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
