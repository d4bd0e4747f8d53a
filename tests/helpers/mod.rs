//! Shared helpers for integration tests.

pub mod analysis_helpers;
pub mod symbol_assertions;
