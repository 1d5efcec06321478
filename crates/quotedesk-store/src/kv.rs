use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Error, Result};

/// String-keyed, string-valued persistent storage.
///
/// Mirrors the browser's `localStorage`: values are opaque strings and every
/// `set` replaces the whole value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process backend for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any single value longer than `bytes`, like a full browser quota.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(limit) = self.quota
            && value.len() > limit
        {
            return Err(Error::QuotaExceeded {
                key: key.to_string(),
                len: value.len(),
                limit,
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_ops() {
        let kv = MemoryStore::new();
        assert_eq!(kv.get("a").unwrap(), None);

        kv.set("a", "1").unwrap();
        kv.set("a", "2").unwrap();
        assert_eq!(kv.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(kv.len(), 1);

        kv.remove("a").unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_quota_rejects_without_writing() {
        let kv = MemoryStore::with_quota(4);
        kv.set("k", "1234").unwrap();

        let err = kv.set("k", "12345").unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded { len: 5, limit: 4, .. }));
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("1234"));
    }
}
