use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;

/// Fixed key the confirmation is stored under.
pub const CONFIRMATION_KEY: &str = "confirmation";

/// Session-scoped key/value storage, mirroring browser sessionStorage:
/// string keys, string values, cleared by the host when the session
/// ends. One writer (the submitter) and one reader (the confirmation
/// view) exist per session, so last-write-wins is fine.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for native hosts and tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        info!("Session entry written: {}", key);
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
