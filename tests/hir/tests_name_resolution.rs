//! Name resolution tests.
//!
//! These tests verify that type references resolve through scope walking,
//! that inner declarations shadow outer ones, and that absolute names
//! ignore the scope they are resolved from.

use rstest::rstest;

use crate::helpers::analysis_helpers::*;
use crate::helpers::symbol_assertions::*;
use crate::helpers::unit_fixtures::*;
use protosema::{ResolveError, ScopePath, TypeKind};

// =============================================================================
// SCOPED RESOLUTION
// =============================================================================

#[test]
fn test_nested_type_resolves_from_message_scope() {
    let analysis = analyze_unit(nest_unit());
    assert_resolves_to(
        &analysis,
        "Egg",
        &scope(&["pkg1.pkg2", "Nest"]),
        ".pkg1.pkg2.Nest.Egg",
        TypeKind::Message,
    );
}

#[test]
fn test_package_sibling_resolves_from_message_scope() {
    let analysis = analyze_unit(nest_unit());
    assert_resolves_to(
        &analysis,
        "Egg2",
        &scope(&["pkg1.pkg2", "Nest"]),
        ".pkg1.pkg2.Egg2",
        TypeKind::Message,
    );
}

#[test]
fn test_unit_package_scope_resolves_the_same() {
    let analysis = analyze_unit(nest_unit());
    let from = ScopePath::for_package(Some("pkg1.pkg2")).child("Nest");

    assert_resolves_to(&analysis, "Egg", &from, ".pkg1.pkg2.Nest.Egg", TypeKind::Message);
    assert_resolves_to(&analysis, "Egg2", &from, ".pkg1.pkg2.Egg2", TypeKind::Message);
}

#[test]
fn test_nested_type_not_visible_from_package_scope() {
    let analysis = analyze_unit(nest_unit());
    assert_not_found(&analysis, "Egg", &scope(&["pkg1.pkg2"]));
}

#[test]
fn test_partially_qualified_reference() {
    let analysis = analyze_unit(nest_unit());
    assert_resolves_to(
        &analysis,
        "Nest.Egg",
        &scope(&["pkg1.pkg2", "Egg2"]),
        ".pkg1.pkg2.Nest.Egg",
        TypeKind::Message,
    );
}

// =============================================================================
// SHADOWING
// =============================================================================

#[rstest]
#[case(&["pkg", "Nest"], ".pkg.Nest.Egg")]
#[case(&["pkg"], ".pkg.Egg")]
#[case(&["pkg", "Other", "Deeper"], ".pkg.Egg")]
fn test_shadowing(#[case] from: &[&str], #[case] expected: &str) {
    let analysis = analyze_unit(shadowing_unit());
    assert_resolves_to(&analysis, "Egg", &scope(from), expected, TypeKind::Message);
}

#[test]
fn test_group_body_is_a_scope() {
    let analysis = analyze_unit(order_unit());
    // `Unit` is declared inside the Line group only
    assert_resolves_to(
        &analysis,
        "Unit",
        &scope(&["acme", "v1", "Order", "Line"]),
        ".acme.v1.Order.Line.Unit",
        TypeKind::Enum,
    );
    assert_not_found(&analysis, "Unit", &scope(&["acme", "v1", "Order"]));
}

// =============================================================================
// ABSOLUTE REFERENCES
// =============================================================================

#[rstest]
#[case(&[])]
#[case(&["pkg1"])]
#[case(&["pkg1", "pkg2", "Nest", "Egg"])]
#[case(&["unrelated", "scope"])]
fn test_absolute_reference_ignores_scope(#[case] from: &[&str]) {
    let analysis = analyze_unit(nest_unit());
    assert_resolves_to(
        &analysis,
        ".pkg1.pkg2.Egg2",
        &scope(from),
        ".pkg1.pkg2.Egg2",
        TypeKind::Message,
    );
}

#[test]
fn test_absolute_reference_is_not_scope_walked() {
    let analysis = analyze_unit(nest_unit());
    // `.Egg2` is only valid as the exact name `.Egg2`
    assert_not_found(&analysis, ".Egg2", &scope(&["pkg1.pkg2"]));
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[rstest]
#[case::nest(nest_unit())]
#[case::order(order_unit())]
#[case::shadowing(shadowing_unit())]
fn test_every_symbol_resolves_to_itself(#[case] unit: protosema::syntax::SourceUnit) {
    let analysis = analyze_unit(unit);
    for symbol in analysis.symbol_table().iter() {
        let (name, kind) = analysis
            .resolve(symbol.name.simple_name(), &symbol.scope)
            .unwrap_or_else(|err| panic!("{} does not resolve to itself: {}", symbol.name, err));
        assert_eq!(name, symbol.name);
        assert_eq!(kind, symbol.kind);
    }
}

#[test]
fn test_not_found_carries_reference_and_scope() {
    let analysis = analyze_unit(nest_unit());
    let from = scope(&["pkg1.pkg2", "Nest"]);

    let err = analysis.resolve("Chick", &from).unwrap_err();
    assert_eq!(err, ResolveError::not_found("Chick", &from));
    assert_eq!(
        err.to_string(),
        "type `Chick` not found from scope [pkg1.pkg2, Nest]"
    );
}

#[test]
fn test_resolve_symbol_returns_registration() {
    let analysis = analyze(&[http_rule_unit(3)]);
    let symbol = analysis
        .resolve_symbol("HttpRule", &scope(&["google", "api"]))
        .unwrap();

    assert_eq!(symbol.file, protosema::FileId::new(3));
    assert_eq!(symbol.location.path, "google/api/http.proto");
}
