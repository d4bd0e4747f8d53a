//! High-level IR (HIR): symbol table, name resolution and option tables.
//!
//! The analysis runs in two explicit phases over a forest of units:
//!
//! ```text
//! collect_types(units)          ← PASS 1: walk declarations
//!     │                           (SymbolTable + deferred option extends)
//!     ▼
//! build_option_tables(...)      ← PASS 2: resolve option field types
//!     │                           (OptionTable)
//!     ▼
//! Resolver::resolve(ref, scope) ← queries against the finished tables
//! ```
//!
//! Pass 2 only starts after pass 1 has seen every unit, so extensions may
//! refer to types declared later or in other units.
//!
//! ## Key Types
//!
//! - [`ScopePath`]: Immutable enclosing-scope path
//! - [`SymbolTable`]: Fully qualified name → [`TypeSymbol`]
//! - [`Resolver`]: Scope-walking type reference resolution
//! - [`OptionTable`]: Per-[`OptionKind`] custom option lookup

mod collect;
mod error;
mod options;
mod resolve;
mod scope;
mod symbols;

pub use collect::{CollectedTypes, DeferredExtension, collect_types, map_entry_name};
pub use error::{AnalysisError, ResolveError};
pub use options::{
    OptionField, OptionFieldType, OptionKind, OptionPath, OptionTable, build_option_tables,
};
pub use resolve::Resolver;
pub use scope::ScopePath;
pub use symbols::{
    DuplicatePolicy, FullyQualifiedName, SymbolOrigin, SymbolTable, TypeKind, TypeSymbol,
};
