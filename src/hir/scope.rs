//! Immutable scope paths threaded through the declaration walk.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::symbols::FullyQualifiedName;

/// Ordered list of enclosing declaration names, outermost first.
///
/// A `ScopePath` is never mutated: [`ScopePath::child`] returns an extended
/// copy, so sibling branches of the walk can't observe each other's scopes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ScopePath {
    segments: Arc<[SmolStr]>,
}

impl ScopePath {
    /// The empty scope (top level of a unit without a package).
    pub fn root() -> Self {
        Self {
            segments: Arc::from(Vec::new()),
        }
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let segments: Vec<SmolStr> = segments.into_iter().map(Into::into).collect();
        Self {
            segments: Arc::from(segments),
        }
    }

    /// Top-level scope of a unit. The whole package is one segment:
    /// `pkg1.pkg2` gives `[pkg1.pkg2]`, so `.pkg1.X` is not a candidate
    /// from inside it.
    pub fn for_package(package: Option<&str>) -> Self {
        match package {
            Some(package) if !package.is_empty() => Self::new([package]),
            _ => Self::root(),
        }
    }

    /// A copy of this path extended by `name`.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(SmolStr::new(name));
        Self {
            segments: Arc::from(segments),
        }
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Canonical name of `name` declared directly in this scope.
    pub fn qualify(&self, name: &str) -> FullyQualifiedName {
        self.qualify_at(self.len(), name)
    }

    /// Canonical name of `name` joined onto the first `depth` segments.
    ///
    /// This is the candidate the resolver tries at each prefix length.
    pub(crate) fn qualify_at(&self, depth: usize, name: &str) -> FullyQualifiedName {
        FullyQualifiedName::join(&self.segments[..depth], name)
    }
}

impl Default for ScopePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(segment)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopePath{}", self)
    }
}
