//! AST types handed over by the upstream schema parser.
//!
//! These are plain owned values. The analysis never mutates them; pass 1
//! walks them and pass 2 borrows the extend blocks it deferred.
//!
//! The constructors and `with_*` builders exist so that drivers and tests
//! can assemble units without a parser.

use smol_str::SmolStr;

use super::scalar::ScalarType;
use crate::base::{FileId, Span};

// ============================================================================
// UNITS
// ============================================================================

/// One parsed schema file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    pub file: FileId,
    /// Path as reported in diagnostics (e.g. `google/api/http.proto`).
    pub path: SmolStr,
    /// Dotted package name, `None` when the file declares no package.
    pub package: Option<SmolStr>,
    pub decls: Vec<Decl>,
}

impl SourceUnit {
    pub fn new(file: FileId, path: impl Into<SmolStr>) -> Self {
        Self {
            file,
            path: path.into(),
            package: None,
            decls: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: impl Into<SmolStr>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_decl(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Message(Message),
    Enum(Enum),
    Extend(Extend),
}

impl From<Message> for Decl {
    fn from(message: Message) -> Self {
        Decl::Message(message)
    }
}

impl From<Enum> for Decl {
    fn from(enumeration: Enum) -> Self {
        Decl::Enum(enumeration)
    }
}

impl From<Extend> for Decl {
    fn from(extend: Extend) -> Self {
        Decl::Extend(extend)
    }
}

// ============================================================================
// TYPE DECLARATIONS
// ============================================================================

/// `message Name { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub name: SmolStr,
    pub entries: Vec<MessageEntry>,
    pub span: Option<Span>,
}

impl Message {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            span: None,
        }
    }

    pub fn with_entry(mut self, entry: impl Into<MessageEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// An entry inside a message or group body.
///
/// Options, reserved ranges and extension ranges are not represented;
/// they carry no type declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageEntry {
    Message(Message),
    Enum(Enum),
    Extend(Extend),
    Field(Field),
    Oneof(Oneof),
}

impl From<Message> for MessageEntry {
    fn from(message: Message) -> Self {
        MessageEntry::Message(message)
    }
}

impl From<Enum> for MessageEntry {
    fn from(enumeration: Enum) -> Self {
        MessageEntry::Enum(enumeration)
    }
}

impl From<Extend> for MessageEntry {
    fn from(extend: Extend) -> Self {
        MessageEntry::Extend(extend)
    }
}

impl From<Field> for MessageEntry {
    fn from(field: Field) -> Self {
        MessageEntry::Field(field)
    }
}

impl From<Oneof> for MessageEntry {
    fn from(oneof: Oneof) -> Self {
        MessageEntry::Oneof(oneof)
    }
}

/// `enum Name { ... }`
///
/// Enum values are not types and are not carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: SmolStr,
    pub span: Option<Span>,
}

impl Enum {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            span: None,
        }
    }
}

/// `extend Target { fields... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Extend {
    /// The extended message as written, e.g. `google.protobuf.MethodOptions`.
    pub target: SmolStr,
    pub fields: Vec<Field>,
    pub span: Option<Span>,
}

impl Extend {
    pub fn new(target: impl Into<SmolStr>) -> Self {
        Self {
            target: target.into(),
            fields: Vec::new(),
            span: None,
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// `oneof name { fields... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Oneof {
    pub name: SmolStr,
    pub fields: Vec<Field>,
    pub span: Option<Span>,
}

impl Oneof {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            span: None,
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Inline message body of a group field: `repeated group Result = 1 { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: SmolStr,
    pub entries: Vec<MessageEntry>,
    pub span: Option<Span>,
}

impl Group {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            span: None,
        }
    }

    pub fn with_entry(mut self, entry: impl Into<MessageEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }
}

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Optional,
    Required,
    Repeated,
}

/// A field declaration, either with a declared type or an inline group.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: Option<FieldLabel>,
    pub body: FieldBody,
    /// Declared numeric tag.
    pub number: u32,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldBody {
    Direct { name: SmolStr, ty: FieldType },
    Group(Group),
}

impl Field {
    pub fn new(name: impl Into<SmolStr>, ty: FieldType, number: u32) -> Self {
        Self {
            label: None,
            body: FieldBody::Direct {
                name: name.into(),
                ty,
            },
            number,
            span: None,
        }
    }

    pub fn group(group: Group, number: u32) -> Self {
        Self {
            label: None,
            body: FieldBody::Group(group),
            number,
            span: None,
        }
    }

    pub fn with_label(mut self, label: FieldLabel) -> Self {
        self.label = Some(label);
        self
    }

    pub fn repeated(self) -> Self {
        self.with_label(FieldLabel::Repeated)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The field's local name.
    ///
    /// Group fields are named after their group, lowercased.
    pub fn name(&self) -> SmolStr {
        match &self.body {
            FieldBody::Direct { name, .. } => name.clone(),
            FieldBody::Group(group) => SmolStr::new(group.name.to_ascii_lowercase()),
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.label == Some(FieldLabel::Repeated)
    }

    pub fn as_group(&self) -> Option<&Group> {
        match &self.body {
            FieldBody::Group(group) => Some(group),
            FieldBody::Direct { .. } => None,
        }
    }

    pub fn field_type(&self) -> Option<&FieldType> {
        match &self.body {
            FieldBody::Direct { ty, .. } => Some(ty),
            FieldBody::Group(_) => None,
        }
    }
}

/// Declared type of a non-group field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// Reference to a message or enum, relative (`Egg`, `google.api.HttpRule`)
    /// or absolute (`.pkg.Egg`).
    Named(SmolStr),
    /// `map<key, value>`
    Map {
        key: ScalarType,
        value: Box<FieldType>,
    },
}

impl FieldType {
    /// Classify a type as written: scalar keywords become [`FieldType::Scalar`],
    /// anything else is a named reference.
    pub fn parse(text: &str) -> Self {
        match ScalarType::from_keyword(text) {
            Some(scalar) => FieldType::Scalar(scalar),
            None => FieldType::Named(SmolStr::new(text)),
        }
    }

    pub fn map(key: ScalarType, value: FieldType) -> Self {
        FieldType::Map {
            key,
            value: Box::new(value),
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, FieldType::Map { .. })
    }
}
