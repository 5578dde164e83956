//! Session persistence seam.
//!
//! A single key-value surface holds the bearer credential and the console
//! preferences. Each key has exactly one writer (the transport/auth path
//! owns the credential, the sync controller owns the page preference), so
//! no transaction discipline is needed.

use std::collections::HashMap;
use std::sync::Mutex;

/// Bearer credential issued at login.
pub const KEY_JWT_TOKEN: &str = "jwt_token";
/// Serialized current-user object.
pub const KEY_USER: &str = "user";
/// Last visited admin page, restored on startup.
pub const KEY_CURRENT_PAGE: &str = "current_page";
/// Language preference.
pub const KEY_LANGUAGE: &str = "language";
/// Theme preference.
pub const KEY_THEME: &str = "theme";

/// Plain key-value persistence scoped to the local user.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(KEY_JWT_TOKEN), None);
        store.set(KEY_JWT_TOKEN, "abc");
        assert_eq!(store.get(KEY_JWT_TOKEN).as_deref(), Some("abc"));
        store.remove(KEY_JWT_TOKEN);
        assert_eq!(store.get(KEY_JWT_TOKEN), None);
    }
}
