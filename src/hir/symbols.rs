//! Symbol table: every declared type keyed by its fully qualified name.
//!
//! The table is filled by the declaration walk (pass 1) and is read-only
//! afterwards. Names are unique; what happens on a second registration of
//! the same name is decided by [`DuplicatePolicy`].

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::error::AnalysisError;
use super::scope::ScopePath;
use crate::base::{FileId, Location};

// ============================================================================
// NAMES
// ============================================================================

/// Canonical absolute name of a declared type, e.g. `.pkg1.pkg2.Nest.Egg`.
///
/// Always starts with the absolute marker `.`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FullyQualifiedName(SmolStr);

impl FullyQualifiedName {
    /// Join scope segments and a name into a canonical name.
    pub fn join<S: AsRef<str>>(scope: &[S], name: &str) -> Self {
        let mut joined = String::new();
        for segment in scope {
            joined.push('.');
            joined.push_str(segment.as_ref());
        }
        joined.push('.');
        joined.push_str(name);
        Self(SmolStr::new(joined))
    }

    /// Accept an already absolute name (`.a.B`). Returns `None` otherwise.
    pub fn from_absolute(name: &str) -> Option<Self> {
        (name.len() > 1 && name.starts_with('.')).then(|| Self(SmolStr::new(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dotted component.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or_default()
    }
}

impl Borrow<str> for FullyQualifiedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FullyQualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for FullyQualifiedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FullyQualifiedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// SYMBOLS
// ============================================================================

/// What kind of type a name refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Message,
    Enum,
    Group,
}

impl TypeKind {
    /// The `FieldDescriptorProto.Type` number used in descriptors.
    pub fn to_descriptor_type(&self) -> i32 {
        match self {
            TypeKind::Group => 10,
            TypeKind::Message => 11,
            TypeKind::Enum => 14,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            TypeKind::Message => "message",
            TypeKind::Enum => "enum",
            TypeKind::Group => "group",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// How a symbol came to exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolOrigin {
    /// Written in the schema (message, enum or group).
    Declared,
    /// Implicit entry message of a `map<K, V>` field.
    MapEntry,
}

/// A registered type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSymbol {
    pub name: FullyQualifiedName,
    pub kind: TypeKind,
    pub origin: SymbolOrigin,
    /// Scope the type was declared in (not including its own name).
    pub scope: ScopePath,
    pub file: FileId,
    pub location: Location,
}

/// What to do when a fully qualified name (or option path) is registered twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Abort the build with a duplicate error.
    #[default]
    Error,
    /// Keep the last registration and log a warning.
    Warn,
    /// Keep the last registration without logging.
    Overwrite,
}

// ============================================================================
// SYMBOL TABLE
// ============================================================================

/// Mapping from fully qualified name to the registered type.
///
/// Backed by an `IndexMap` so iteration follows declaration order. Equality
/// ignores order: two walks of the same forest in different sibling orders
/// produce equal tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    by_name: IndexMap<FullyQualifiedName, TypeSymbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a type by its exact absolute name.
    pub fn lookup(&self, name: &str) -> Option<&TypeSymbol> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.by_name.values()
    }

    /// All symbols declared in one file.
    pub fn symbols_in_file(&self, file: FileId) -> impl Iterator<Item = &TypeSymbol> {
        self.by_name.values().filter(move |s| s.file == file)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Register a symbol, applying `policy` if its name is already taken.
    pub(crate) fn insert(
        &mut self,
        symbol: TypeSymbol,
        policy: DuplicatePolicy,
    ) -> Result<(), AnalysisError> {
        if let Some(existing) = self.by_name.get(&symbol.name) {
            match policy {
                DuplicatePolicy::Error => {
                    return Err(AnalysisError::DuplicateType {
                        name: symbol.name.clone(),
                        existing: existing.kind,
                        first: existing.location.clone(),
                        location: symbol.location,
                    });
                }
                DuplicatePolicy::Warn => {
                    tracing::warn!(
                        "[SYMBOLS] {} redefines {} {} (first defined at {})",
                        symbol.location,
                        existing.kind,
                        symbol.name,
                        existing.location
                    );
                }
                DuplicatePolicy::Overwrite => {}
            }
        }

        tracing::trace!("[SYMBOLS] register {} {}", symbol.kind, symbol.name);
        self.by_name.insert(symbol.name.clone(), symbol);
        Ok(())
    }
}
