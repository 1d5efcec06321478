use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{KeyValueStore, Result};
use quotedesk_types::RequestId;

/// One stored element: decoded, or kept verbatim when it does not fit `T`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Entry<T> {
    Record(T),
    Unreadable(Value),
}

/// A JSON-array collection as stored, in stored order.
///
/// Elements that fail to decode are carried along untouched so a rewrite
/// never drops them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Collection<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Collection<T> {
    pub(crate) fn records(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        })
    }

    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter_map(|entry| match entry {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        })
    }

    pub(crate) fn into_records(self) -> Vec<T> {
        self.entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Record(record) => Some(record),
                Entry::Unreadable(_) => None,
            })
            .collect()
    }

    pub(crate) fn prepend(&mut self, record: T) {
        self.entries.insert(0, Entry::Record(record));
    }

    pub(crate) fn push(&mut self, record: T) {
        self.entries.push(Entry::Record(record));
    }

    /// Remove the first decoded record matching `predicate`.
    pub(crate) fn remove_first(&mut self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let pos = self
            .entries
            .iter()
            .position(|entry| matches!(entry, Entry::Record(record) if predicate(record)))?;
        match self.entries.remove(pos) {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        }
    }

    /// Numeric `id`s found on undecodable elements.
    pub(crate) fn unreadable_ids(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Unreadable(value) => value.get("id").and_then(Value::as_u64).map(RequestId::new),
            Entry::Record(_) => None,
        })
    }
}

/// Read a whole JSON-array collection.
///
/// Absent keys are empty. A blob that is not a JSON array is logged and read
/// as empty; the next write replaces it. Inside a valid array each element is
/// decoded on its own, and elements that do not decode are kept verbatim.
/// Backend failures propagate.
pub(crate) fn load<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Result<Collection<T>> {
    let Some(raw) = kv.get(key)? else {
        return Ok(Collection { entries: Vec::new() });
    };

    let values: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored collection is unreadable, treating as empty");
            return Ok(Collection { entries: Vec::new() });
        }
    };

    let entries = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match T::deserialize(&value) {
            Ok(record) => Entry::Record(record),
            Err(err) => {
                tracing::warn!(key, index, error = %err, "stored record is unreadable, keeping it as is");
                Entry::Unreadable(value)
            }
        })
        .collect();

    Ok(Collection { entries })
}

/// Decoded records only.
pub(crate) fn read<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    Ok(load(kv, key)?.into_records())
}

pub(crate) fn store<T: Serialize>(
    kv: &dyn KeyValueStore,
    key: &str,
    collection: &Collection<T>,
) -> Result<()> {
    let encoded = serde_json::to_string(&collection.entries)?;
    kv.set(key, &encoded)
}

/// Keep ids strictly increasing: a proposed id at or below the newest stored
/// one is moved just past it.
pub(crate) fn next_id(existing: impl Iterator<Item = RequestId>, proposed: RequestId) -> RequestId {
    match existing.max() {
        Some(newest) if proposed <= newest => newest.next(),
        _ => proposed,
    }
}
