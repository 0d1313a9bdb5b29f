//! Integration test utilities for the roster service
//!
//! In-memory repositories that honour the same uniqueness rules as the
//! database, plus helpers for driving the REST API over a real socket.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
