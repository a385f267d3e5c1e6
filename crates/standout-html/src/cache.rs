//! The compiled template cache.
//!
//! Entries are keyed by logical template name (plus the layout name) and are
//! never evicted; the key space is bounded by the templates an application
//! ships, not by traffic.
//!
//! Lookups take the read lock, stores take the write lock, and no lock is held
//! while compiling. To keep concurrent misses for the same name from compiling
//! it twice, callers hold the per-name lock from [`TemplateCache::compile_lock`]
//! around "check again, compile, store".

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::template::CompiledTemplate;

/// Name to compiled template map guarded by a reader/writer lock.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: RwLock<HashMap<String, Arc<CompiledTemplate>>>,
    compiling: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled template stored under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<CompiledTemplate>> {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Stores `template` under `name`, replacing any previous entry.
    pub fn store(&self, name: impl Into<String>, template: Arc<CompiledTemplate>) {
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), template);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Returns the lock serializing compiles of `name`.
    ///
    /// Locks are created on first use and kept, one per name.
    pub(crate) fn compile_lock(&self, name: &str) -> Arc<Mutex<()>> {
        let mut compiling = self
            .compiling
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(compiling.entry(name.to_string()).or_default())
    }
}
