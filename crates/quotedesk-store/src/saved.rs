use crate::{KeyValueStore, Result, collection, keys};

/// Ids the user bookmarked, in the order they were saved.
pub struct SavedIds<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> SavedIds<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> Result<Vec<u64>> {
        collection::read(self.kv, keys::SAVED_POSTS)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, id: u64) -> Result<bool> {
        Ok(self.list()?.contains(&id))
    }

    /// Save `id` if absent, unsave it if present. Returns whether it is now saved.
    pub fn toggle(&self, id: u64) -> Result<bool> {
        let mut ids = collection::load::<u64>(self.kv, keys::SAVED_POSTS)?;
        let saved = if ids.remove_first(|&x| x == id).is_some() {
            false
        } else {
            ids.push(id);
            true
        };
        collection::store(self.kv, keys::SAVED_POSTS, &ids)?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_toggle_round_trip() {
        let kv = MemoryStore::new();
        let saved = SavedIds::new(&kv);

        assert!(saved.toggle(10).unwrap());
        assert!(saved.toggle(20).unwrap());
        assert!(saved.toggle(30).unwrap());
        assert!(!saved.toggle(20).unwrap());

        assert_eq!(saved.list().unwrap(), vec![10, 30]);
        assert!(saved.contains(30).unwrap());
        assert!(!saved.contains(20).unwrap());
    }
}
