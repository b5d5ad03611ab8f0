//! The state every command executes against.

use crate::store::Store;
use crate::transaction::TransactionLog;

/// A store together with its transaction log.
///
/// The two always change together: BEGIN reads the store, ROLLBACK writes
/// it. Any future concurrent access must lock the whole `Engine` for the
/// duration of one command.
#[derive(Debug, Default)]
pub struct Engine {
    store: Store,
    txlog: TransactionLog,
}

impl Engine {
    /// Creates an engine with an empty store and no open transactions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the live store for mutation.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Returns the transaction log.
    #[must_use]
    pub fn txlog(&self) -> &TransactionLog {
        &self.txlog
    }

    /// Opens a transaction.
    pub fn begin(&mut self) {
        self.txlog.begin(&self.store);
    }

    /// Rolls back the innermost open transaction, if any.
    pub fn rollback(&mut self) -> bool {
        self.txlog.rollback(&mut self.store)
    }

    /// Commits every open transaction.
    pub fn commit(&mut self) -> usize {
        self.txlog.commit()
    }
}
