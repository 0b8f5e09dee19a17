use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::session::KeyValueStore;

/// In-memory KeyValueStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds consistent string pairs.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }

    fn set_all(&self, entries: &[(String, String)]) {
        let mut map = self.entries();
        for (key, value) in entries {
            map.insert(key.clone(), value.clone());
        }
    }

    fn remove_all(&self, keys: &[String]) {
        let mut map = self.entries();
        for key in keys {
            map.remove(key);
        }
    }
}
