//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use standout_html::{Config, ContentSource, LoadError, MemorySource, Renderer};

/// Content source that counts loads per name and can be edited in place.
#[derive(Default)]
pub struct CountingSource {
    views: RwLock<MemorySource>,
    loads: Mutex<HashMap<String, usize>>,
}

impl CountingSource {
    pub fn new(views: MemorySource) -> Arc<Self> {
        Arc::new(Self {
            views: RwLock::new(views),
            loads: Mutex::new(HashMap::new()),
        })
    }

    pub fn loads(&self, name: &str) -> usize {
        self.loads.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn total_loads(&self) -> usize {
        self.loads.lock().unwrap().values().sum()
    }

    pub fn set(&self, name: &str, content: &str) {
        self.views.write().unwrap().insert(name, content);
    }
}

impl ContentSource for CountingSource {
    fn load_content(&self, name: &str) -> Result<String, LoadError> {
        *self
            .loads
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default() += 1;
        self.views.read().unwrap().load_content(name)
    }
}

pub fn renderer(source: &Arc<CountingSource>) -> Renderer {
    Renderer::new(Config::from_shared(source.clone()))
}

pub fn uncached_renderer(source: &Arc<CountingSource>) -> Renderer {
    Renderer::new(Config::from_shared(source.clone()).with_cache_disabled(true))
}
