//! Snapshot stack backing BEGIN / ROLLBACK / COMMIT.

use crate::store::{Snapshot, Store};

/// Stack of store snapshots, one per open transaction.
///
/// The stack is empty exactly when no transaction is open, and its depth
/// equals the nesting depth of open transactions.
///
/// ## Semantics
///
/// - `begin` pushes a full copy of the store.
/// - `rollback` pops the newest copy and restores it. With nothing open it
///   does nothing.
/// - `commit` forgets every pending rollback point at once. The live store
///   is left untouched; there is no merge into a parent level.
#[derive(Debug, Default)]
pub struct TransactionLog {
    snapshots: Vec<Snapshot>,
}

impl TransactionLog {
    /// Creates a log with no open transactions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a (possibly nested) transaction by recording the store's
    /// current state.
    pub fn begin(&mut self, store: &Store) {
        self.snapshots.push(store.snapshot_copy());
        tracing::debug!(depth = self.snapshots.len(), "transaction opened");
    }

    /// Undoes everything since the innermost open `begin`.
    ///
    /// Returns true if a snapshot was restored, false if nothing was open.
    pub fn rollback(&mut self, store: &mut Store) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                store.restore(snapshot);
                tracing::debug!(depth = self.snapshots.len(), "transaction rolled back");
                true
            }
            None => {
                tracing::trace!("rollback with no open transaction");
                false
            }
        }
    }

    /// Closes every open transaction, keeping the store as it is.
    ///
    /// Returns the number of rollback points discarded.
    pub fn commit(&mut self) -> usize {
        let discarded = self.snapshots.len();
        self.snapshots.clear();
        tracing::debug!(discarded, "transactions committed");
        discarded
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if at least one transaction is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_rollback_restores() {
        let mut store = Store::new();
        let mut log = TransactionLog::new();
        store.set("a", "1");

        log.begin(&store);
        store.set("a", "2");
        store.set("b", "3");
        assert!(log.rollback(&mut store));

        assert_eq!(store.get("a"), "1");
        assert_eq!(store.get("b"), "");
        assert!(!log.is_active());
    }

    #[test]
    fn nested_rollback_one_level_at_a_time() {
        let mut store = Store::new();
        let mut log = TransactionLog::new();

        log.begin(&store);
        store.set("a", "1");
        log.begin(&store);
        store.set("a", "2");
        assert_eq!(log.depth(), 2);

        log.rollback(&mut store);
        assert_eq!(store.get("a"), "1");
        assert_eq!(log.depth(), 1);

        log.rollback(&mut store);
        assert_eq!(store.get("a"), "");
        assert_eq!(log.depth(), 0);
    }

    #[test]
    fn rollback_on_empty_is_noop() {
        let mut store = Store::new();
        let mut log = TransactionLog::new();
        store.set("a", "1");

        for _ in 0..3 {
            assert!(!log.rollback(&mut store));
        }
        assert_eq!(store.get("a"), "1");
    }

    #[test]
    fn commit_clears_all_levels() {
        let mut store = Store::new();
        let mut log = TransactionLog::new();

        log.begin(&store);
        store.set("a", "1");
        log.begin(&store);
        store.set("a", "2");

        assert_eq!(log.commit(), 2);
        assert!(!log.is_active());
        assert_eq!(store.get("a"), "2");

        assert!(!log.rollback(&mut store));
        assert_eq!(store.get("a"), "2");
    }

    #[test]
    fn commit_without_transaction() {
        let mut log = TransactionLog::new();
        assert_eq!(log.commit(), 0);
    }
}
