//! Error types for symbol collection, name resolution and option tables.

use smol_str::SmolStr;
use thiserror::Error;

use super::options::{OptionKind, OptionPath};
use super::scope::ScopePath;
use super::symbols::{FullyQualifiedName, TypeKind};
use crate::base::Location;

/// A type reference that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Not found as an absolute name nor under any prefix of the scope.
    #[error("type `{reference}` not found from scope {scope}")]
    NotFound {
        reference: SmolStr,
        scope: ScopePath,
    },
}

impl ResolveError {
    pub fn not_found(reference: impl Into<SmolStr>, scope: &ScopePath) -> Self {
        Self::NotFound {
            reference: reference.into(),
            scope: scope.clone(),
        }
    }

    /// The reference text as written.
    pub fn reference(&self) -> &str {
        match self {
            Self::NotFound { reference, .. } => reference,
        }
    }

    /// The scope the lookup started from.
    pub fn scope(&self) -> &ScopePath {
        match self {
            Self::NotFound { scope, .. } => scope,
        }
    }
}

/// Errors that abort [`crate::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The type of a custom option field could not be resolved.
    #[error("{location}: cannot resolve type of option field `{field}`: {source}")]
    Unresolved {
        location: Location,
        field: SmolStr,
        #[source]
        source: ResolveError,
    },

    /// Two declarations produce the same fully qualified name.
    #[error("{location}: `{name}` is already defined as {existing} at {first}")]
    DuplicateType {
        name: FullyQualifiedName,
        existing: TypeKind,
        first: Location,
        location: Location,
    },

    /// Two extension fields produce the same option path on one option kind.
    #[error("{location}: option `{path}` is already declared on {kind}")]
    DuplicateOption {
        kind: OptionKind,
        path: OptionPath,
        location: Location,
    },

    /// Map fields can't be extensions.
    #[error("{location}: map field `{field}` cannot extend {kind}")]
    MapExtension {
        kind: OptionKind,
        field: SmolStr,
        location: Location,
    },
}

impl AnalysisError {
    /// Create an unresolved option field error.
    pub fn unresolved(location: Location, field: impl Into<SmolStr>, source: ResolveError) -> Self {
        Self::Unresolved {
            location,
            field: field.into(),
            source,
        }
    }

    /// Where the offending declaration lives.
    pub fn location(&self) -> &Location {
        match self {
            Self::Unresolved { location, .. }
            | Self::DuplicateType { location, .. }
            | Self::DuplicateOption { location, .. }
            | Self::MapExtension { location, .. } => location,
        }
    }
}
