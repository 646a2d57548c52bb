//! In-memory blob store for tests and ephemeral sessions.

use crate::store::{BlobStore, StoreResult};
use std::collections::HashMap;

/// HashMap-backed store; contents vanish with the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one key, bypassing the gateway. Test convenience.
    pub fn seed(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryBlobStore;
    use crate::store::BlobStore;

    #[test]
    fn get_returns_none_for_unwritten_key() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("books").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = MemoryBlobStore::new();
        store.set("books", "[]").unwrap();
        store.set("books", "[1]").unwrap();
        assert_eq!(store.get("books").unwrap().as_deref(), Some("[1]"));
    }
}
