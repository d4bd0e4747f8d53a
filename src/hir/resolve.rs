//! Name resolution: resolving type references to their declarations.
//!
//! A reference is either absolute (`.pkg.Egg`) and looked up as is, or
//! relative and tried against every prefix of the scope it appears in,
//! innermost first. A unit's package is a single scope segment, so the
//! walk never stops at a parent package:
//!
//! ```text
//! resolve("Egg", [pkg1.pkg2, Nest])
//!   .pkg1.pkg2.Nest.Egg
//!   .pkg1.pkg2.Egg
//!   .Egg
//! ```
//!
//! The first hit wins, so a type declared in an inner scope shadows a
//! same-named type further out. Resolution only makes sense once the
//! declaration walk has seen every unit of the forest.

use super::error::ResolveError;
use super::scope::ScopePath;
use super::symbols::{FullyQualifiedName, SymbolTable, TypeKind, TypeSymbol};

/// Resolver for type references against a completed [`SymbolTable`].
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Resolver<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn symbol_table(&self) -> &'a SymbolTable {
        self.symbols
    }

    /// Resolve `reference` as seen from `scope`.
    pub fn resolve(
        &self,
        reference: &str,
        scope: &ScopePath,
    ) -> Result<(FullyQualifiedName, TypeKind), ResolveError> {
        self.resolve_symbol(reference, scope)
            .map(|symbol| (symbol.name.clone(), symbol.kind))
    }

    /// Like [`Resolver::resolve`] but returns the whole registered symbol.
    pub fn resolve_symbol(
        &self,
        reference: &str,
        scope: &ScopePath,
    ) -> Result<&'a TypeSymbol, ResolveError> {
        // 1. Absolute names are scope independent
        if reference.starts_with('.') {
            return self.symbols.lookup(reference).ok_or_else(|| {
                tracing::debug!("[RESOLVE] absolute '{}' not registered", reference);
                ResolveError::not_found(reference, scope)
            });
        }

        if reference.is_empty() {
            return Err(ResolveError::not_found(reference, scope));
        }

        // 2. Walk scope prefixes from innermost to the empty prefix
        for depth in (0..=scope.len()).rev() {
            let candidate = scope.qualify_at(depth, reference);
            if let Some(symbol) = self.symbols.lookup(candidate.as_str()) {
                tracing::trace!(
                    "[RESOLVE] '{}' from {} -> {}",
                    reference,
                    scope,
                    symbol.name
                );
                return Ok(symbol);
            }
        }

        tracing::debug!(
            "[RESOLVE] '{}' not found in any of {} scopes from {}",
            reference,
            scope.len() + 1,
            scope
        );
        Err(ResolveError::not_found(reference, scope))
    }
}
