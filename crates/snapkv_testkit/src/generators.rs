//! Property-based test generators using proptest.
//!
//! Keys and values are drawn from small alphabets so that generated
//! scripts collide on keys and share values often enough to exercise
//! overwrites, COUNTS and FIND.

use proptest::prelude::*;

/// A single protocol command with concrete arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `GET key`
    Get(String),
    /// `SET key value`
    Set(String, String),
    /// `UNSET key`
    Unset(String),
    /// `COUNTS value`
    Counts(String),
    /// `FIND value`
    Find(String),
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
}

impl Op {
    /// Renders the operation as a protocol line.
    #[must_use]
    pub fn to_line(&self) -> String {
        match self {
            Op::Get(k) => format!("GET {k}"),
            Op::Set(k, v) => format!("SET {k} {v}"),
            Op::Unset(k) => format!("UNSET {k}"),
            Op::Counts(v) => format!("COUNTS {v}"),
            Op::Find(v) => format!("FIND {v}"),
            Op::Begin => "BEGIN".to_string(),
            Op::Rollback => "ROLLBACK".to_string(),
            Op::Commit => "COMMIT".to_string(),
        }
    }
}

/// Strategy for generating keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,2}").expect("Invalid regex")
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,2}").expect("Invalid regex")
}

/// Strategy for generating data-only operations (no transaction control).
pub fn data_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => key_strategy().prop_map(Op::Unset),
        1 => key_strategy().prop_map(Op::Get),
        1 => value_strategy().prop_map(Op::Counts),
        1 => value_strategy().prop_map(Op::Find),
    ]
}

/// Strategy for generating any operation except END.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => data_op_strategy(),
        1 => Just(Op::Begin),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

/// Strategy for generating command scripts.
pub fn script_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..max_len)
}

/// Strategy for generating a sequence of SET pairs.
pub fn set_pairs_strategy(max_len: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..max_len)
}

/// Test configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Fewer cases for quick runs.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
