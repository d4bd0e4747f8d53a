//! Custom option tables: pass 2 of the analysis.
//!
//! Extensions of the nine option-carrying messages
//! (`google.protobuf.FileOptions`, `...MethodOptions`, ...) declare custom
//! options. For example
//!
//! ```text
//! package google.api;
//! extend google.protobuf.MethodOptions {
//!   HttpRule http = 72295728;
//! }
//! ```
//!
//! makes `(google.api.http)` usable on methods. Pass 1 only records these
//! extend blocks; [`build_option_tables`] resolves their field types once
//! every unit has been walked, so an extension may use a type declared
//! later or in another unit.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::collect::DeferredExtension;
use super::error::AnalysisError;
use super::resolve::Resolver;
use super::scope::ScopePath;
use super::symbols::{DuplicatePolicy, FullyQualifiedName, SymbolTable, TypeKind};
use crate::base::{FileId, Location};
use crate::syntax::{Field, FieldBody, FieldType, ScalarType};

// ============================================================================
// OPTION KINDS
// ============================================================================

/// The option-carrying messages of the descriptor metamodel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKind {
    File,
    Message,
    Field,
    Oneof,
    Enum,
    EnumValue,
    Service,
    Method,
    ExtensionRange,
}

impl OptionKind {
    pub const ALL: [OptionKind; 9] = [
        OptionKind::File,
        OptionKind::Message,
        OptionKind::Field,
        OptionKind::Oneof,
        OptionKind::Enum,
        OptionKind::EnumValue,
        OptionKind::Service,
        OptionKind::Method,
        OptionKind::ExtensionRange,
    ];

    /// Full name of the options message this kind extends.
    pub fn extendee(&self) -> &'static str {
        match self {
            OptionKind::File => "google.protobuf.FileOptions",
            OptionKind::Message => "google.protobuf.MessageOptions",
            OptionKind::Field => "google.protobuf.FieldOptions",
            OptionKind::Oneof => "google.protobuf.OneofOptions",
            OptionKind::Enum => "google.protobuf.EnumOptions",
            OptionKind::EnumValue => "google.protobuf.EnumValueOptions",
            OptionKind::Service => "google.protobuf.ServiceOptions",
            OptionKind::Method => "google.protobuf.MethodOptions",
            OptionKind::ExtensionRange => "google.protobuf.ExtensionRangeOptions",
        }
    }

    /// Match an extend target as written. A leading `.` is accepted.
    pub fn from_extendee(target: &str) -> Option<Self> {
        let target = target.strip_prefix('.').unwrap_or(target);
        Self::ALL.into_iter().find(|kind| kind.extendee() == target)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extendee())
    }
}

// ============================================================================
// OPTION PATHS
// ============================================================================

/// Canonical dotted name of a custom option, e.g. `.google.api.http`.
///
/// Built with the same convention as type names, so the shape does not
/// depend on whether the extend block was top-level or nested.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionPath(SmolStr);

impl OptionPath {
    /// Normalize an option name as written: surrounding parentheses are
    /// stripped and a missing leading `.` is added.
    ///
    /// `http`, `.http` and `(http)` all normalize to `.http`.
    pub fn normalize(name: &str) -> Self {
        let name = strip_parens(name);
        if name.starts_with('.') {
            Self(SmolStr::new(name))
        } else {
            Self(SmolStr::new(format!(".{}", name)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FullyQualifiedName> for OptionPath {
    fn from(name: FullyQualifiedName) -> Self {
        Self(SmolStr::new(name.as_str()))
    }
}

impl Borrow<str> for OptionPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn strip_parens(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(name)
}

// ============================================================================
// OPTION FIELDS
// ============================================================================

/// Value type of a custom option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionFieldType {
    Scalar(ScalarType),
    /// Message, enum or group valued option.
    Named {
        kind: TypeKind,
        type_name: FullyQualifiedName,
    },
}

impl OptionFieldType {
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            OptionFieldType::Scalar(scalar) => Some(*scalar),
            OptionFieldType::Named { .. } => None,
        }
    }

    pub fn type_name(&self) -> Option<&FullyQualifiedName> {
        match self {
            OptionFieldType::Named { type_name, .. } => Some(type_name),
            OptionFieldType::Scalar(_) => None,
        }
    }

    pub fn type_kind(&self) -> Option<TypeKind> {
        match self {
            OptionFieldType::Named { kind, .. } => Some(*kind),
            OptionFieldType::Scalar(_) => None,
        }
    }

    /// The `FieldDescriptorProto.Type` number used in descriptors.
    pub fn to_descriptor_type(&self) -> i32 {
        match self {
            OptionFieldType::Scalar(scalar) => scalar.to_descriptor_type(),
            OptionFieldType::Named { kind, .. } => kind.to_descriptor_type(),
        }
    }
}

/// A resolved custom option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionField {
    /// Extension number within the extended options message.
    pub number: u32,
    pub ty: OptionFieldType,
    pub repeated: bool,
    /// Unit that declared the extension.
    pub file: FileId,
}

// ============================================================================
// OPTION TABLE
// ============================================================================

/// Per-kind lookup tables of custom options, keyed by [`OptionPath`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionTable {
    tables: FxHashMap<OptionKind, FxHashMap<OptionPath, OptionField>>,
}

impl OptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option by path. The path is normalized first, see
    /// [`OptionPath::normalize`].
    pub fn lookup(&self, kind: OptionKind, path: &str) -> Option<&OptionField> {
        let path = OptionPath::normalize(path);
        self.tables.get(&kind)?.get(path.as_str())
    }

    /// Find an option named as written at a declaration inside `scope`.
    ///
    /// Relative names are tried against every prefix of the scope,
    /// innermost first, the same way type references are.
    pub fn resolve(
        &self,
        kind: OptionKind,
        name: &str,
        scope: &ScopePath,
    ) -> Option<(&OptionPath, &OptionField)> {
        let table = self.tables.get(&kind)?;
        let name = strip_parens(name);

        if name.starts_with('.') {
            return table.get_key_value(name);
        }
        if name.is_empty() {
            return None;
        }

        (0..=scope.len())
            .rev()
            .find_map(|depth| table.get_key_value(scope.qualify_at(depth, name).as_str()))
    }

    /// All options declared for one kind, in no particular order.
    pub fn options(&self, kind: OptionKind) -> impl Iterator<Item = (&OptionPath, &OptionField)> {
        self.tables.get(&kind).into_iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(|t| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn insert(
        &mut self,
        kind: OptionKind,
        path: OptionPath,
        field: OptionField,
        location: Location,
        policy: DuplicatePolicy,
    ) -> Result<(), AnalysisError> {
        let table = self.tables.entry(kind).or_default();
        if table.contains_key(&path) {
            match policy {
                DuplicatePolicy::Error => {
                    return Err(AnalysisError::DuplicateOption {
                        kind,
                        path,
                        location,
                    });
                }
                DuplicatePolicy::Warn => {
                    tracing::warn!(
                        "[OPTIONS] {}: option {} on {} redeclared",
                        location,
                        path,
                        kind
                    );
                }
                DuplicatePolicy::Overwrite => {}
            }
        }
        table.insert(path, field);
        Ok(())
    }
}

// ============================================================================
// PASS 2
// ============================================================================

/// Resolve every deferred extension into option tables.
///
/// Must run after the declaration walk has completed over the whole forest.
/// The first field whose type can't be resolved aborts the build.
pub fn build_option_tables(
    symbols: &SymbolTable,
    deferred: &[DeferredExtension<'_>],
    policy: DuplicatePolicy,
) -> Result<OptionTable, AnalysisError> {
    let resolver = Resolver::new(symbols);
    let mut table = OptionTable::new();

    for extension in deferred {
        for field in extension.fields() {
            let location = extension.location_of(field);
            let ty = option_field_type(&resolver, extension, field, &location)?;
            let path = OptionPath::from(extension.scope.qualify(&field.name()));

            tracing::trace!(
                "[OPTIONS] {} {} = {} ({:?})",
                extension.kind,
                path,
                field.number,
                ty
            );

            let option = OptionField {
                number: field.number,
                ty,
                repeated: field.is_repeated(),
                file: extension.file,
            };
            table.insert(extension.kind, path, option, location, policy)?;
        }
    }

    tracing::debug!(
        "[OPTIONS] built {} options from {} extend blocks",
        table.len(),
        deferred.len()
    );
    Ok(table)
}

fn option_field_type(
    resolver: &Resolver<'_>,
    extension: &DeferredExtension<'_>,
    field: &Field,
    location: &Location,
) -> Result<OptionFieldType, AnalysisError> {
    let reference = match &field.body {
        FieldBody::Direct {
            ty: FieldType::Scalar(scalar),
            ..
        } => return Ok(OptionFieldType::Scalar(*scalar)),
        FieldBody::Direct {
            name,
            ty: FieldType::Map { .. },
        } => {
            return Err(AnalysisError::MapExtension {
                kind: extension.kind,
                field: name.clone(),
                location: location.clone(),
            });
        }
        FieldBody::Direct {
            ty: FieldType::Named(reference),
            ..
        } => reference.clone(),
        // Inline groups were registered under the extension's scope in pass 1
        FieldBody::Group(group) => SmolStr::new(extension.scope.qualify(&group.name).as_str()),
    };

    resolver
        .resolve(&reference, &extension.scope)
        .map(|(type_name, kind)| OptionFieldType::Named { kind, type_name })
        .map_err(|source| AnalysisError::unresolved(location.clone(), field.name(), source))
}
