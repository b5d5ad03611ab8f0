//! The live key-value mapping and its snapshots.

use std::collections::BTreeMap;

/// A point-in-time copy of a [`Store`]'s entries.
///
/// Snapshots are fully independent of the store they were taken from;
/// later writes to the store never show through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<String, String>,
}

impl Snapshot {
    /// Returns the number of entries captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot captured an empty store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the captured value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// String-to-string mapping that commands read and mutate.
///
/// Keys iterate in ascending order, so [`Store::find_keys`] is
/// deterministic.
///
/// # Example
///
/// ```rust
/// use snapkv_core::Store;
///
/// let mut store = Store::new();
/// store.set("a", "10");
/// store.set("b", "10");
/// assert_eq!(store.count_value("10"), 2);
/// assert_eq!(store.find_keys("10"), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: BTreeMap<String, String>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `key`, or an empty string if absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map_or("", String::as_str)
    }

    /// Binds `key` to `value`, replacing any previous binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes the binding for `key`.
    ///
    /// Removing an absent key is a no-op. Returns whether a binding existed.
    pub fn unset(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Counts the entries whose value equals `value`.
    // Linear scan. A value -> count index would go here if stores grow large.
    #[must_use]
    pub fn count_value(&self, value: &str) -> usize {
        self.entries.values().filter(|v| v.as_str() == value).count()
    }

    /// Returns every key bound to `value`, in ascending key order.
    #[must_use]
    pub fn find_keys(&self, value: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, v)| v.as_str() == value)
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Returns true if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Takes a deep copy of every entry.
    #[must_use]
    pub fn snapshot_copy(&self) -> Snapshot {
        Snapshot {
            entries: self.entries.clone(),
        }
    }

    /// Replaces the live entries with those captured in `snapshot`.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.entries = snapshot.entries;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_is_empty() {
        let store = Store::new();
        assert_eq!(store.get("missing"), "");
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let mut store = Store::new();
        store.set("a", "1");
        store.set("a", "2");
        assert_eq!(store.get("a"), "2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unset_absent_is_noop() {
        let mut store = Store::new();
        store.set("a", "1");
        assert!(!store.unset("b"));
        assert!(store.unset("a"));
        assert!(!store.unset("a"));
        assert!(store.is_empty());
    }

    #[test]
    fn count_and_find() {
        let mut store = Store::new();
        store.set("b", "10");
        store.set("a", "10");
        store.set("c", "20");

        assert_eq!(store.count_value("10"), 2);
        assert_eq!(store.count_value("30"), 0);
        assert_eq!(store.find_keys("10"), vec!["a", "b"]);
        assert!(store.find_keys("30").is_empty());
    }

    #[test]
    fn snapshot_is_independent() {
        let mut store = Store::new();
        store.set("a", "1");

        let snapshot = store.snapshot_copy();
        store.set("a", "2");
        store.set("b", "3");

        assert_eq!(snapshot.get("a"), Some("1"));
        assert_eq!(snapshot.get("b"), None);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn restore_replaces_entries() {
        let mut store = Store::new();
        store.set("a", "1");
        let snapshot = store.snapshot_copy();

        store.set("b", "2");
        store.unset("a");
        store.restore(snapshot);

        assert_eq!(store.get("a"), "1");
        assert!(!store.contains_key("b"));
    }
}
