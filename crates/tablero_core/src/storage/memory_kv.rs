//! In-process key-value storage.

use super::kv::{KeyValueStorage, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage area held in memory for the lifetime of the value.
///
/// Single-threaded by construction (`RefCell`), matching store usage.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
