//! Symbol and option assertion helpers.

use protosema::{Analysis, OptionField, OptionKind, ScopePath, TypeKind, TypeSymbol};

/// Build a scope path from segments.
pub fn scope(segments: &[&str]) -> ScopePath {
    ScopePath::new(segments.iter().copied())
}

/// Assert a symbol exists and return it for further assertions.
pub fn get_symbol<'a>(analysis: &'a Analysis, name: &str) -> &'a TypeSymbol {
    analysis
        .symbol_table()
        .lookup(name)
        .unwrap_or_else(|| panic!("Expected symbol '{}' to exist", name))
}

/// Resolve a reference from a scope and assert the result.
pub fn assert_resolves_to(
    analysis: &Analysis,
    reference: &str,
    from: &ScopePath,
    expected: &str,
    kind: TypeKind,
) {
    match analysis.resolve(reference, from) {
        Ok((name, found_kind)) => {
            assert_eq!(
                name.as_str(),
                expected,
                "'{}' from {} resolved to the wrong type",
                reference,
                from
            );
            assert_eq!(found_kind, kind, "'{}' resolved with the wrong kind", reference);
        }
        Err(err) => panic!("'{}' did not resolve from {}: {}", reference, from, err),
    }
}

/// Assert a reference does not resolve from a scope.
pub fn assert_not_found(analysis: &Analysis, reference: &str, from: &ScopePath) {
    if let Ok((name, _)) = analysis.resolve(reference, from) {
        panic!(
            "Expected '{}' not to resolve from {}, got {}",
            reference, from, name
        );
    }
}

/// Assert an option exists and return it.
pub fn get_option<'a>(analysis: &'a Analysis, kind: OptionKind, path: &str) -> &'a OptionField {
    analysis
        .lookup_option(kind, path)
        .unwrap_or_else(|| panic!("Expected option '{}' on {}", path, kind))
}
