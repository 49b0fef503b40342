//! Durable key/value storage behind the store.
//!
//! The browser implementation lives in `agri-dashboard-ui` (it needs
//! `web-sys`); [`MemoryStorage`] serves native code and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value storage with the semantics of `window.localStorage`.
///
/// Calls are synchronous and may fail (quota exceeded, storage disabled).
pub trait ProfileStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory storage.
///
/// Cheaply cloneable (via `Rc`); clones share the same entries, so a test
/// can hand one clone to the store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ProfileStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
