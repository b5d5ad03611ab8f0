//! # SnapKV Testkit
//!
//! Test utilities for SnapKV.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Engine fixtures and script runners
//! - A journal-based reference model for differential tests
//!
//! ## Usage
//!
//! ```rust
//! use snapkv_testkit::prelude::*;
//!
//! let lines = transcript("SET a 1\nGET a");
//! assert_eq!(lines, vec!["1"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
