//! Snapshot-based transactions.
//!
//! Every BEGIN captures a full copy of the store. Nesting is a stack of
//! copies; ROLLBACK pops one level and COMMIT drops them all.

mod log;

pub use log::TransactionLog;
