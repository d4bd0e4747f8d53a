//! Syntax input: the AST shape produced by the upstream schema parser.
//!
//! Parsing is not done here. A driver parses each `.proto` file into a
//! [`SourceUnit`] and hands the whole forest to [`crate::build`].

pub mod ast;
mod scalar;

pub use ast::{
    Decl, Enum, Extend, Field, FieldBody, FieldLabel, FieldType, Group, Message, MessageEntry,
    Oneof, SourceUnit,
};
pub use scalar::ScalarType;

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};
