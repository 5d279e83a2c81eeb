//! Pixmap Cache
//!
//! Memoizes rendered avatar composites keyed by on-screen size, user level and
//! avatar identity. The cache is a pure optimization: entries may be evicted
//! at any time and every caller must treat a miss as the normal path.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::pixmap::Pixmap;

/// Injectable cache capability, so tests can substitute a deterministic
/// in-memory stand-in for the process-wide default.
pub trait PixmapCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Pixmap>;
    fn put(&self, key: &str, pixmap: Pixmap);
}

/// Entry cap for [`InMemoryPixmapCache`]. Eviction beyond this is arbitrary;
/// no caller may rely on retention.
const MAX_ENTRIES: usize = 256;

pub struct InMemoryPixmapCache {
    entries: RwLock<HashMap<String, Pixmap>>,
}

impl InMemoryPixmapCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for InMemoryPixmapCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PixmapCache for InMemoryPixmapCache {
    fn get(&self, key: &str) -> Option<Pixmap> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, pixmap: Pixmap) {
        let mut entries = self.entries.write();
        if entries.len() >= MAX_ENTRIES && !entries.contains_key(key) {
            if let Some(victim) = entries.keys().next().cloned() {
                debug!("pixmap cache full, evicting {}", victim);
                entries.remove(&victim);
            }
        }
        entries.insert(key.to_string(), pixmap);
    }
}

lazy_static::lazy_static! {
    static ref SHARED_CACHE: Arc<InMemoryPixmapCache> = Arc::new(InMemoryPixmapCache::new());
}

/// Process-wide default pixmap cache shared by all panels.
pub fn shared_cache() -> Arc<InMemoryPixmapCache> {
    SHARED_CACHE.clone()
}
