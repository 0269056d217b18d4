use std::{
    collections::HashMap,
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use super::{ImageError, ImageSource};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Process-lifetime cache of resolved remote images, keyed by the literal
/// reference string.
///
/// Each key owns a `OnceCell`, so concurrent lookups of one key share a
/// single in-flight fetch. Entries are never evicted or replaced once set;
/// they go away only when the owning resolver is dropped.
/// A failed fetch leaves its cell empty and the next lookup retries.
#[derive(Debug, Default)]
pub struct ImageCache {
    cells: Mutex<HashMap<String, Arc<OnceCell<ImageSource>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached source for `key`, if a fetch for it has completed.
    pub fn get(&self, key: &str) -> Option<ImageSource> {
        self.cells.lock().get(key).and_then(|c| c.get().cloned())
    }

    /// Returns the cached source for `key`, running `init` to produce it
    /// when absent. At most one `init` runs per key at a time.
    pub async fn get_or_try_insert_with<F, Fut>(
        &self,
        key: &str,
        init: F,
    ) -> Result<ImageSource, ImageError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ImageSource, ImageError>>,
    {
        // Lock only long enough to find the cell; never across an await.
        let cell = self.cells.lock().entry(key.to_string()).or_default().clone();

        if let Some(hit) = cell.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("Image cache hit: {key}");
            return Ok(hit.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("Image cache miss: {key}");
        cell.get_or_try_init(init).await.cloned()
    }

    pub fn stats(&self) -> ImageCacheStats {
        ImageCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self
                .cells
                .lock()
                .values()
                .filter(|c| c.initialized())
                .count(),
        }
    }
}
