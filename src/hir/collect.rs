//! Declaration walk: pass 1 of the analysis.
//!
//! Visits every declaration of every unit depth-first and registers each
//! named type in the [`SymbolTable`]:
//!
//! - messages and groups are registered and recursed into
//! - enums are registered (their values are not types)
//! - map fields register their implicit `<Name>Entry` message
//! - extend blocks of option messages are deferred to pass 2 unresolved
//!
//! Nothing is resolved here. The scope is passed down as an immutable
//! [`ScopePath`]; each descent works on its own extended copy.

use smol_str::SmolStr;

use super::error::AnalysisError;
use super::options::OptionKind;
use super::scope::ScopePath;
use super::symbols::{DuplicatePolicy, SymbolOrigin, SymbolTable, TypeKind, TypeSymbol};
use crate::base::{FileId, Location, Span};
use crate::syntax::{Decl, Extend, Field, FieldBody, Group, Message, MessageEntry, SourceUnit};

/// An `extend` of an option message, waiting for pass 2.
#[derive(Clone, Debug)]
pub struct DeferredExtension<'ast> {
    pub kind: OptionKind,
    /// Scope the extend block was declared in.
    pub scope: ScopePath,
    pub file: FileId,
    /// Unit path, for diagnostics.
    pub path: SmolStr,
    pub extend: &'ast Extend,
}

impl<'ast> DeferredExtension<'ast> {
    pub fn fields(&self) -> &'ast [Field] {
        &self.extend.fields
    }

    pub(crate) fn location_of(&self, field: &Field) -> Location {
        Location::new(self.path.clone(), field.span.or(self.extend.span))
    }
}

/// Output of pass 1.
#[derive(Debug, Default)]
pub struct CollectedTypes<'ast> {
    pub symbols: SymbolTable,
    pub deferred: Vec<DeferredExtension<'ast>>,
}

/// Walk every unit of the forest, registering types and deferring option
/// extensions.
pub fn collect_types<'ast>(
    units: &'ast [SourceUnit],
    policy: DuplicatePolicy,
) -> Result<CollectedTypes<'ast>, AnalysisError> {
    let mut collected = CollectedTypes::default();

    for unit in units {
        let mut collector = Collector {
            unit,
            policy,
            out: &mut collected,
        };
        collector.walk_unit()?;
    }

    tracing::debug!(
        "[COLLECT] {} units: {} types, {} option extensions deferred",
        units.len(),
        collected.symbols.len(),
        collected.deferred.len()
    );
    Ok(collected)
}

/// Walk state for one unit. Holds no scope: scopes travel as arguments.
struct Collector<'c, 'ast> {
    unit: &'ast SourceUnit,
    policy: DuplicatePolicy,
    out: &'c mut CollectedTypes<'ast>,
}

impl<'c, 'ast> Collector<'c, 'ast> {
    fn walk_unit(&mut self) -> Result<(), AnalysisError> {
        let unit = self.unit;
        let scope = ScopePath::for_package(unit.package.as_deref());
        tracing::trace!("[COLLECT] unit {} scope {}", unit.path, scope);

        for decl in &unit.decls {
            match decl {
                Decl::Message(message) => self.walk_message(message, &scope)?,
                Decl::Enum(enumeration) => self.register(
                    &enumeration.name,
                    TypeKind::Enum,
                    SymbolOrigin::Declared,
                    &scope,
                    enumeration.span,
                )?,
                Decl::Extend(extend) => self.walk_extend(extend, &scope)?,
            }
        }
        Ok(())
    }

    fn walk_message(
        &mut self,
        message: &'ast Message,
        scope: &ScopePath,
    ) -> Result<(), AnalysisError> {
        self.register(
            &message.name,
            TypeKind::Message,
            SymbolOrigin::Declared,
            scope,
            message.span,
        )?;
        self.walk_entries(&message.entries, &scope.child(&message.name))
    }

    fn walk_group(&mut self, group: &'ast Group, scope: &ScopePath) -> Result<(), AnalysisError> {
        self.register(
            &group.name,
            TypeKind::Group,
            SymbolOrigin::Declared,
            scope,
            group.span,
        )?;
        self.walk_entries(&group.entries, &scope.child(&group.name))
    }

    fn walk_entries(
        &mut self,
        entries: &'ast [MessageEntry],
        scope: &ScopePath,
    ) -> Result<(), AnalysisError> {
        for entry in entries {
            match entry {
                MessageEntry::Message(message) => self.walk_message(message, scope)?,
                MessageEntry::Enum(enumeration) => self.register(
                    &enumeration.name,
                    TypeKind::Enum,
                    SymbolOrigin::Declared,
                    scope,
                    enumeration.span,
                )?,
                MessageEntry::Extend(extend) => self.walk_extend(extend, scope)?,
                MessageEntry::Field(field) => self.walk_field(field, scope)?,
                // Oneof fields live in the enclosing message's scope
                MessageEntry::Oneof(oneof) => {
                    for field in &oneof.fields {
                        self.walk_field(field, scope)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn walk_extend(
        &mut self,
        extend: &'ast Extend,
        scope: &ScopePath,
    ) -> Result<(), AnalysisError> {
        match OptionKind::from_extendee(&extend.target) {
            Some(kind) => {
                tracing::trace!("[COLLECT] defer extend {} in {}", extend.target, scope);
                self.out.deferred.push(DeferredExtension {
                    kind,
                    scope: scope.clone(),
                    file: self.unit.file,
                    path: self.unit.path.clone(),
                    extend,
                });
            }
            None => {
                tracing::trace!(
                    "[COLLECT] extend {} is not an option message, skipped for options",
                    extend.target
                );
            }
        }

        // Groups declared inside any extend are still types
        for field in &extend.fields {
            if let Some(group) = field.as_group() {
                self.walk_group(group, scope)?;
            }
        }
        Ok(())
    }

    fn walk_field(&mut self, field: &'ast Field, scope: &ScopePath) -> Result<(), AnalysisError> {
        match &field.body {
            FieldBody::Group(group) => self.walk_group(group, scope),
            FieldBody::Direct { name, ty } if ty.is_map() => self.register(
                &map_entry_name(name),
                TypeKind::Message,
                SymbolOrigin::MapEntry,
                scope,
                field.span,
            ),
            FieldBody::Direct { .. } => Ok(()),
        }
    }

    fn register(
        &mut self,
        name: &str,
        kind: TypeKind,
        origin: SymbolOrigin,
        scope: &ScopePath,
        span: Option<Span>,
    ) -> Result<(), AnalysisError> {
        let symbol = TypeSymbol {
            name: scope.qualify(name),
            kind,
            origin,
            scope: scope.clone(),
            file: self.unit.file,
            location: Location::new(self.unit.path.clone(), span),
        };
        self.out.symbols.insert(symbol, self.policy)
    }
}

/// Name of the implicit entry message of a map field.
///
/// The field name is camel-cased and suffixed with `Entry`:
/// `my_map` becomes `MyMapEntry`, `tags` becomes `TagsEntry`.
pub fn map_entry_name(field_name: &str) -> String {
    let mut result = String::with_capacity(field_name.len() + 5);
    let mut capitalize_next = true;
    for c in field_name.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result.push_str("Entry");
    result
}
