//! In-memory per-address bookmark store.
//!
//! Each visitor, identified by network address, owns an ordered list of
//! verse keys with no duplicates. Nothing is persisted; the store lives and
//! dies with the process.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Thread-safe map from client address to its bookmarked verse keys.
///
/// All mutation goes through the interior lock, so concurrent requests from
/// the same address cannot lose updates.
#[derive(Clone, Default)]
pub struct BookmarkStore {
    inner: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl BookmarkStore {
    /// Append a verse key to the address's list if not already present.
    ///
    /// Returns `true` if the key was inserted.
    pub fn add(&self, addr: &str, verse_key: &str) -> bool {
        let mut map = self.inner.write();
        let list = map.entry(addr.to_string()).or_default();
        if list.iter().any(|k| k == verse_key) {
            return false;
        }
        list.push(verse_key.to_string());
        true
    }

    /// Remove a verse key from the address's list.
    ///
    /// Returns `true` if the key was present. Removing an absent key is a
    /// no-op.
    pub fn remove(&self, addr: &str, verse_key: &str) -> bool {
        let mut map = self.inner.write();
        let Some(list) = map.get_mut(addr) else {
            return false;
        };
        let before = list.len();
        list.retain(|k| k != verse_key);
        before != list.len()
    }

    /// The address's bookmarked verse keys, in insertion order.
    pub fn list(&self, addr: &str) -> Vec<String> {
        self.inner.read().get(addr).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_list() {
        let store = BookmarkStore::default();
        assert!(store.add("10.0.0.1", "2:255"));
        assert!(store.add("10.0.0.1", "1:1"));
        assert_eq!(store.list("10.0.0.1"), vec!["2:255", "1:1"]);
    }

    #[test]
    fn add_is_idempotent() {
        let store = BookmarkStore::default();
        assert!(store.add("10.0.0.1", "2:255"));
        assert!(!store.add("10.0.0.1", "2:255"));
        assert_eq!(store.list("10.0.0.1"), vec!["2:255"]);
    }

    #[test]
    fn remove_present_key() {
        let store = BookmarkStore::default();
        store.add("10.0.0.1", "2:255");
        store.add("10.0.0.1", "1:1");
        assert!(store.remove("10.0.0.1", "2:255"));
        assert_eq!(store.list("10.0.0.1"), vec!["1:1"]);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store = BookmarkStore::default();
        store.add("10.0.0.1", "1:1");
        assert!(!store.remove("10.0.0.1", "2:255"));
        assert!(!store.remove("192.168.0.9", "1:1"));
        assert_eq!(store.list("10.0.0.1"), vec!["1:1"]);
    }

    #[test]
    fn addresses_are_isolated() {
        let store = BookmarkStore::default();
        store.add("10.0.0.1", "2:255");
        assert_eq!(store.list("10.0.0.1"), vec!["2:255"]);
        assert!(store.list("10.0.0.2").is_empty());
    }

    #[test]
    fn list_for_unknown_address_is_empty() {
        let store = BookmarkStore::default();
        assert!(store.list("10.0.0.1").is_empty());
    }

    #[test]
    fn insertion_order_survives_removal() {
        let store = BookmarkStore::default();
        for key in ["3:1", "1:7", "2:255", "1:1"] {
            store.add("10.0.0.1", key);
        }
        store.remove("10.0.0.1", "1:7");
        assert_eq!(store.list("10.0.0.1"), vec!["3:1", "2:255", "1:1"]);
    }
}
