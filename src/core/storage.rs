//! Key-value storage capability
//!
//! The login flow writes the access token through [`KeyValueStore`] instead
//! of reaching for `window.localStorage` directly. The browser implementation
//! lives in `ui::browser`; [`MemoryStore`] backs tests and the server.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::logging::warn;

use super::error::StorageError;
use super::token::AccessToken;

/// Storage key the access token is written under
pub const TOKEN_KEY: &str = "token";

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Overwrite `key` with the token. A failed write is logged and dropped.
pub fn persist_token<S: KeyValueStore + ?Sized>(store: &S, key: &str, token: &AccessToken) {
    if let Err(e) = store.set(key, token.as_str()) {
        warn!("Failed to persist access token: {}", e);
    }
}
