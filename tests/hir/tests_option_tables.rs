//! Custom option table tests.
//!
//! These tests verify that extensions of the option messages are resolved
//! into per-kind option tables after every unit has been walked.

use rstest::rstest;

use crate::helpers::analysis_helpers::*;
use crate::helpers::symbol_assertions::*;
use crate::helpers::unit_fixtures::*;
use protosema::syntax::{Extend, Field, FieldType, Message, ScalarType, SourceUnit};
use protosema::{FileId, OptionFieldType, OptionKind, TypeKind};

// =============================================================================
// HTTP RULE
// =============================================================================

#[test]
fn test_top_level_http_option() {
    let analysis = analyze(&[top_level_http_extend_unit(0), http_rule_unit(1)]);

    let http = get_option(&analysis, OptionKind::Method, "http");
    assert_eq!(http.number, 72295728);
    assert_eq!(http.ty.type_kind(), Some(TypeKind::Message));
    assert_eq!(http.ty.type_name().unwrap(), ".google.api.HttpRule");
    assert!(http.ty.scalar().is_none());
    assert!(!http.repeated);
    assert_eq!(http.file, FileId::new(0));
}

#[test]
fn test_packaged_http_option_path_includes_package() {
    let analysis = analyze(&[annotations_unit(0), http_rule_unit(1)]);

    let http = get_option(&analysis, OptionKind::Method, "google.api.http");
    assert_eq!(http.number, 72295728);
    assert_eq!(http.ty.type_name().unwrap(), ".google.api.HttpRule");

    // same option, spelled as at a use site
    assert_eq!(
        analysis.lookup_option(OptionKind::Method, "(google.api.http)"),
        Some(http)
    );
    assert!(analysis.lookup_option(OptionKind::Method, "http").is_none());
    assert!(analysis.lookup_option(OptionKind::Service, "google.api.http").is_none());
}

#[test]
fn test_extension_before_its_type_in_forest() {
    // annotations come first and reference a type from a later unit
    let analysis = analyze(&[annotations_unit(0), http_rule_unit(1)]);
    assert!(analysis.lookup_option(OptionKind::Method, ".google.api.http").is_some());
}

// =============================================================================
// OPTION KINDS AND VALUE TYPES
// =============================================================================

#[rstest]
#[case(OptionKind::Message, "acme.v1.Order.audited", 50100)]
#[case(OptionKind::Message, "acme.v1.Order.retention", 50101)]
#[case(OptionKind::Field, "acme.v1.default_status", 50200)]
#[case(OptionKind::Field, "acme.v1.aliases", 50201)]
fn test_order_options(#[case] kind: OptionKind, #[case] path: &str, #[case] number: u32) {
    let analysis = analyze_unit(order_unit());
    assert_eq!(get_option(&analysis, kind, path).number, number);
}

#[test]
fn test_option_value_types() {
    let analysis = analyze_unit(order_unit());

    let audited = get_option(&analysis, OptionKind::Message, "acme.v1.Order.audited");
    assert_eq!(audited.ty, OptionFieldType::Scalar(ScalarType::Bool));

    let retention = get_option(&analysis, OptionKind::Message, "acme.v1.Order.retention");
    assert_eq!(retention.ty.type_kind(), Some(TypeKind::Group));
    assert_eq!(retention.ty.type_name().unwrap(), ".acme.v1.Order.Retention");

    let status = get_option(&analysis, OptionKind::Field, "acme.v1.default_status");
    assert_eq!(status.ty.type_kind(), Some(TypeKind::Enum));
    assert_eq!(status.ty.type_name().unwrap(), ".acme.v1.Status");
    assert_eq!(status.ty.to_descriptor_type(), 14);

    let aliases = get_option(&analysis, OptionKind::Field, "acme.v1.aliases");
    assert_eq!(aliases.ty.scalar(), Some(ScalarType::String));
    assert!(aliases.repeated);
}

#[test]
fn test_every_option_has_exactly_one_type_description() {
    let analysis = analyze(&[annotations_unit(0), http_rule_unit(1), order_unit_with_file(2)]);

    let mut seen = 0;
    for kind in OptionKind::ALL {
        for (path, option) in analysis.option_table().options(kind) {
            seen += 1;
            assert_ne!(
                option.ty.scalar().is_some(),
                option.ty.type_name().is_some(),
                "{} on {} must have exactly one of scalar/type name",
                path,
                kind
            );
        }
    }
    assert_eq!(seen, 5);
}

fn order_unit_with_file(file: u32) -> SourceUnit {
    let mut unit = order_unit();
    unit.file = FileId::new(file);
    unit
}

#[rstest]
#[case(OptionKind::File)]
#[case(OptionKind::Message)]
#[case(OptionKind::Field)]
#[case(OptionKind::Oneof)]
#[case(OptionKind::Enum)]
#[case(OptionKind::EnumValue)]
#[case(OptionKind::Service)]
#[case(OptionKind::Method)]
#[case(OptionKind::ExtensionRange)]
fn test_each_option_kind_gets_its_own_table(#[case] kind: OptionKind) {
    let unit = SourceUnit::new(FileId::new(0), "opts.proto")
        .with_package("opts")
        .with_decl(
            Extend::new(kind.extendee())
                .with_field(Field::new("marker", FieldType::parse("uint32"), 60000)),
        );
    let analysis = analyze_unit(unit);

    assert_eq!(get_option(&analysis, kind, "opts.marker").number, 60000);
    for other in OptionKind::ALL.into_iter().filter(|k| *k != kind) {
        assert!(analysis.lookup_option(other, "opts.marker").is_none());
    }
}

#[test]
fn test_non_option_extend_is_not_an_option() {
    let unit = SourceUnit::new(FileId::new(0), "ext.proto")
        .with_package("pkg")
        .with_decl(Message::new("Base"))
        .with_decl(Extend::new("pkg.Base").with_field(Field::new(
            "extra",
            FieldType::parse("string"),
            100,
        )));
    let analysis = analyze_unit(unit);

    assert!(analysis.option_table().is_empty());
}

// =============================================================================
// USE-SITE RESOLUTION
// =============================================================================

#[test]
fn test_resolve_option_from_declaration_scope() {
    let analysis = analyze_unit(order_unit());
    let item_scope = scope(&["acme.v1", "Order", "Item"]);

    let (path, option) = analysis
        .resolve_option(OptionKind::Field, "(default_status)", &item_scope)
        .unwrap();
    assert_eq!(path.as_str(), ".acme.v1.default_status");
    assert_eq!(option.number, 50200);

    let (path, _) = analysis
        .resolve_option(OptionKind::Message, "(audited)", &item_scope)
        .unwrap();
    assert_eq!(path.as_str(), ".acme.v1.Order.audited");

    assert!(analysis
        .resolve_option(OptionKind::Message, "(audited)", &scope(&["acme.v1"]))
        .is_none());
}
