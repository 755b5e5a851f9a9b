//! Versioned envelope for persisted lists.
//!
//! Lists are written as `{"version": N, "items": [...]}`. Bare arrays from
//! profiles written before the envelope existed still load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::store::{load_json, save_or_warn, KeyValueStore};
use crate::core::constants::PERSISTED_SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredList<T> {
    Versioned { version: u32, items: Vec<T> },
    Bare(Vec<T>),
}

#[derive(Serialize)]
struct StoredListRef<'a, T> {
    version: u32,
    items: &'a [T],
}

/// Loads a list written by [`save_list`], or a bare legacy array.
/// Missing or unreadable data yields an empty list.
pub fn load_list<T: DeserializeOwned, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<T> {
    match load_json::<StoredList<T>, S>(store, key) {
        Ok(Some(StoredList::Versioned { version, items })) => {
            if version > PERSISTED_SCHEMA_VERSION {
                tracing::warn!(key, version, "list written by a newer schema");
            }
            items
        }
        Ok(Some(StoredList::Bare(items))) => items,
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to load list, using empty");
            Vec::new()
        }
    }
}

/// Best-effort write of `items` in the versioned envelope.
pub fn save_list<T: Serialize, S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    items: &[T],
) -> bool {
    save_or_warn(
        store,
        key,
        &StoredListRef {
            version: PERSISTED_SCHEMA_VERSION,
            items,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_list_written_with_version() {
        let mut store = MemoryStore::new();
        assert!(save_list(&mut store, "history", &[1u32, 2, 3]));
        let raw = store.read("history").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], PERSISTED_SCHEMA_VERSION);
        assert_eq!(load_list::<u32, _>(&store, "history"), vec![1, 2, 3]);
    }

    #[test]
    fn test_bare_array_still_loads() {
        let mut store = MemoryStore::new();
        store.write("history", "[4, 5]").unwrap();
        assert_eq!(load_list::<u32, _>(&store, "history"), vec![4, 5]);
    }

    #[test]
    fn test_garbage_loads_empty() {
        let mut store = MemoryStore::new();
        store.write("history", r#"{"items": "nope"}"#).unwrap();
        assert!(load_list::<u32, _>(&store, "history").is_empty());
    }
}
