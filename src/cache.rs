//! Memoization for compiled geometry.
//!
//! Region path strings are static data, so the same (string, transform)
//! pair comes up on every render and every hit-test. The cache keeps one
//! compiled copy per distinct key behind a mutex. Misses build *outside*
//! the lock: two callers racing on the same key may both build, and the
//! last writer's entry persists — accepted redundancy in exchange for a
//! simple locking discipline. There is no eviction; `invalidate` is the
//! only way entries leave the table.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::path::{builder, CompiledPath};
use crate::transform::ViewportTransform;

/// Composite cache key. Transform components are compared bit-for-bit so
/// that keying is exact rather than epsilon-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PathKey {
    path: String,
    scale: u64,
    offset_x: u64,
    offset_y: u64,
}

impl PathKey {
    fn new(path: &str, transform: &ViewportTransform) -> Self {
        PathKey {
            path: path.to_owned(),
            scale: transform.scale.to_bits(),
            offset_x: transform.offset_x.to_bits(),
            offset_y: transform.offset_y.to_bits(),
        }
    }
}

/// Concurrency-safe memo table from (source string, transform) to compiled
/// geometry. Readers receive shared immutable handles; entries are never
/// partially visible.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: Mutex<HashMap<PathKey, Arc<CompiledPath>>>,
}

impl PathCache {
    pub fn new() -> Self {
        PathCache::default()
    }

    /// Returns the compiled geometry for `path` under `transform`,
    /// building and inserting it on a miss.
    pub fn get(&self, path: &str, transform: &ViewportTransform) -> Arc<CompiledPath> {
        let key = PathKey::new(path, transform);

        {
            let entries = self.entries.lock().unwrap();
            if let Some(cached) = entries.get(&key) {
                return Arc::clone(cached);
            }
        }

        let built = Arc::new(builder::build_path(
            path,
            transform.scale,
            transform.offset_x,
            transform.offset_y,
        ));

        let mut entries = self.entries.lock().unwrap();
        entries.insert(key, Arc::clone(&built));
        built
    }

    /// Atomically clears every entry.
    pub fn invalidate(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of cached entries. Mostly useful in tests.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
