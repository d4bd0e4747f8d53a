//! Foundation types for protosema.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Compact identifier for a parsed source unit
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//! - [`Location`] - A unit path plus optional span, used in diagnostics
//!
//! This module has NO dependencies on other protosema modules.

mod file_id;
mod position;

pub use file_id::FileId;
pub use position::{Location, Position, Span};
