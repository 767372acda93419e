// Each harness binary compiles this module separately and uses only a
// subset of the fixtures.
#![allow(dead_code)]
//! Shared test utilities for beaulog integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod fixtures;

pub use fixtures::*;
