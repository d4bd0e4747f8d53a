//! Analysis: one semantic-resolution run over a forest of units.
//!
//! [`build`] runs both passes and returns an [`Analysis`] that owns the
//! finished symbol and option tables. Nothing is shared between runs; build
//! a new `Analysis` whenever the unit set changes.
//!
//! ## Usage
//!
//! ```ignore
//! let analysis = protosema::build(&units)?;
//!
//! let scope = ScopePath::for_package(Some("pkg1.pkg2")).child("Nest");
//! let (name, kind) = analysis.resolve("Egg", &scope)?;
//!
//! let http = analysis.lookup_option(OptionKind::Method, "google.api.http");
//! ```

mod options;

pub use options::AnalysisOptions;

use crate::hir::{
    AnalysisError, FullyQualifiedName, OptionField, OptionKind, OptionPath, OptionTable,
    ResolveError, Resolver, ScopePath, SymbolTable, TypeKind, TypeSymbol, build_option_tables,
    collect_types,
};
use crate::syntax::SourceUnit;

/// Result of a completed run: immutable symbol and option tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    symbols: SymbolTable,
    options: OptionTable,
}

/// Run both passes over `units` with default options.
pub fn build(units: &[SourceUnit]) -> Result<Analysis, AnalysisError> {
    build_with_options(units, &AnalysisOptions::default())
}

/// Run both passes over `units`.
///
/// Pass 1 walks every unit before pass 2 resolves any option extension.
/// The first error aborts the run; no partial tables are returned.
pub fn build_with_options(
    units: &[SourceUnit],
    options: &AnalysisOptions,
) -> Result<Analysis, AnalysisError> {
    let collected = collect_types(units, options.duplicate_types)?;
    let option_table = build_option_tables(
        &collected.symbols,
        &collected.deferred,
        options.duplicate_options,
    )?;

    Ok(Analysis {
        symbols: collected.symbols,
        options: option_table,
    })
}

impl Analysis {
    /// Resolve a type reference as seen from `scope`.
    pub fn resolve(
        &self,
        reference: &str,
        scope: &ScopePath,
    ) -> Result<(FullyQualifiedName, TypeKind), ResolveError> {
        self.resolver().resolve(reference, scope)
    }

    /// Resolve a type reference and return the registered symbol.
    pub fn resolve_symbol(
        &self,
        reference: &str,
        scope: &ScopePath,
    ) -> Result<&TypeSymbol, ResolveError> {
        self.resolver().resolve_symbol(reference, scope)
    }

    /// Look up a custom option by its dotted path (`google.api.http`,
    /// `.google.api.http` or `(google.api.http)`).
    pub fn lookup_option(&self, kind: OptionKind, path: &str) -> Option<&OptionField> {
        self.options.lookup(kind, path)
    }

    /// Find a custom option named as written at a declaration in `scope`.
    pub fn resolve_option(
        &self,
        kind: OptionKind,
        name: &str,
        scope: &ScopePath,
    ) -> Option<(&OptionPath, &OptionField)> {
        self.options.resolve(kind, name, scope)
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.symbols)
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn option_table(&self) -> &OptionTable {
        &self.options
    }
}
