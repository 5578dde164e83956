//! File-backed session store.
//!
//! Persists the key-value session map as pretty JSON under the user's
//! config directory. The [`SessionStore`] trait is infallible, so I/O
//! failures degrade to an in-memory session and a log line.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use opsvault_client::SessionStore;

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("opsvault")
        .join("session.json")
}

pub struct JsonFileSessionStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl JsonFileSessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::at(default_path())
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("cannot create session directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(values) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::warn!("cannot persist session: {e}");
                }
            }
            Err(e) => log::warn!("cannot serialize session: {e}"),
        }
    }
}

impl Default for JsonFileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for JsonFileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
            self.flush(&values);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
            self.flush(&values);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_file() {
        let dir = std::env::temp_dir().join(format!("opsvault-store-{}", std::process::id()));
        let path = dir.join("session.json");
        let store = JsonFileSessionStore::at(path.clone());
        store.set("jwt_token", "abc");
        store.set("current_page", "hosts");

        let reloaded = JsonFileSessionStore::at(path.clone());
        assert_eq!(reloaded.get("jwt_token").as_deref(), Some("abc"));
        reloaded.remove("jwt_token");
        assert_eq!(reloaded.get("jwt_token"), None);
        assert_eq!(reloaded.get("current_page").as_deref(), Some("hosts"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file_starts_empty() {
        let store = JsonFileSessionStore::at(PathBuf::from("/nonexistent/opsvault/session.json"));
        assert_eq!(store.get("jwt_token"), None);
    }
}
