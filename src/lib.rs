//! # protosema
//!
//! Semantic resolution for Protocol Buffers schemas: builds the symbol
//! table of a forest of parsed units, resolves scoped type references to
//! fully qualified names and turns custom option extensions into lookup
//! tables.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis  → build(), Analysis session, AnalysisOptions
//!   ↓
//! hir       → Scope walk, SymbolTable, Resolver, OptionTable
//!   ↓
//! syntax    → AST input types handed over by the parser
//!   ↓
//! base      → Primitives (FileId, Span, Location)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → analysis)
// ============================================================================

/// Foundation types: FileId, Span, Location
pub mod base;

/// Syntax: AST input types
pub mod syntax;

/// High-level IR: symbol table, name resolution, option tables
pub mod hir;

/// Analysis session: the `build` entry point and query API
pub mod analysis;

pub use analysis::{Analysis, AnalysisOptions, build, build_with_options};
pub use base::{FileId, Location, Position, Span};
pub use hir::{
    AnalysisError, DuplicatePolicy, FullyQualifiedName, OptionField, OptionFieldType, OptionKind,
    OptionPath, OptionTable, ResolveError, ScopePath, SymbolTable, TypeKind, TypeSymbol,
};
