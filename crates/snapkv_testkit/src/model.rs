//! Reference model for differential testing.
//!
//! The model implements the same protocol with an undo journal instead of
//! full snapshots: each write records the overwritten value on the
//! innermost open level, and rollback replays that level backwards.
//! Agreement between the two is strong evidence both are right.

use crate::generators::Op;
use std::collections::HashMap;

/// Journal-based key-value model.
#[derive(Debug, Default)]
pub struct Model {
    data: HashMap<String, String>,
    journal: Vec<Vec<(String, Option<String>)>>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an operation, returning the line it would print.
    pub fn apply(&mut self, op: &Op) -> Option<String> {
        match op {
            Op::Get(k) => Some(self.data.get(k).cloned().unwrap_or_default()),
            Op::Set(k, v) => {
                let old = self.data.insert(k.clone(), v.clone());
                self.record(k, old);
                None
            }
            Op::Unset(k) => {
                let old = self.data.remove(k);
                if old.is_some() {
                    self.record(k, old);
                }
                None
            }
            Op::Counts(v) => Some(self.data.values().filter(|x| *x == v).count().to_string()),
            Op::Find(v) => {
                let mut keys: Vec<&str> = self
                    .data
                    .iter()
                    .filter(|(_, x)| *x == v)
                    .map(|(k, _)| k.as_str())
                    .collect();
                keys.sort_unstable();
                Some(keys.join(" "))
            }
            Op::Begin => {
                self.journal.push(Vec::new());
                None
            }
            Op::Rollback => {
                if let Some(level) = self.journal.pop() {
                    for (k, old) in level.into_iter().rev() {
                        match old {
                            Some(v) => self.data.insert(k, v),
                            None => self.data.remove(&k),
                        };
                    }
                }
                None
            }
            Op::Commit => {
                self.journal.clear();
                None
            }
        }
    }

    /// Returns the current value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no keys are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.journal.len()
    }

    fn record(&mut self, key: &str, old: Option<String>) {
        if let Some(level) = self.journal.last_mut() {
            level.push((key.to_string(), old));
        }
    }
}
