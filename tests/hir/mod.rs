//! HIR layer tests
//!
//! Tests for the semantic-resolution stage:
//! - Symbol collection from units
//! - Name resolution and shadowing
//! - Custom option tables
//! - Edge cases and error reporting

pub mod tests_name_resolution;
pub mod tests_option_tables;
