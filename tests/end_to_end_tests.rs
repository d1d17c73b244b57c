//! A whole unit driven from JSON: descriptor, AST fragments, resolution,
//! diagnostics, and the declared-type holder.

use phz::ast::{Child, NodeKind};
use phz::unit::parse_node;
use phz::{
    Diagnostic, DiagnosticKind, KindDispatchStrategy, KnownClasses, Property, Resolver,
    UnionType, UnitDescriptor,
};

const UNIT: &str = r#"{
    "file": "src/App/Kernel.php",
    "namespace": "\\App",
    "aliases": { "class": { "Foo": "\\Vendor\\Foo" } },
    "class": "\\App\\Kernel",
    "variables": { "request": "\\Vendor\\Foo\\Request", "count": "int" }
}"#;

fn unit_context() -> phz::Context {
    phz::tracing_config::init_tracing();
    UnitDescriptor::from_json(UNIT).unwrap().to_context()
}

#[test]
fn test_names_resolve_against_unit_aliases() {
    let ctx = unit_context();
    let mut resolver = Resolver::new(&ctx);

    let cases = [
        (r#"{"kind": "name", "flags": 1, "children": ["Foo"]}"#, "\\Vendor\\Foo"),
        (r#"{"kind": "name", "flags": 1, "children": ["Foo\\Bar"]}"#, "\\Vendor\\Foo\\Bar"),
        (r#"{"kind": "name", "flags": 1, "children": ["Baz"]}"#, "\\App\\Baz"),
        (r#"{"kind": "name", "flags": 0, "children": ["\\Other\\Baz"]}"#, "\\Other\\Baz"),
    ];
    for (json, expected) in cases {
        let node = parse_node(json).unwrap();
        assert_eq!(resolver.qualified_name(&node).unwrap(), expected, "{json}");
    }
}

#[test]
fn test_variables_and_diagnostics_flow_to_sink() {
    let ctx = unit_context();
    let mut resolver = Resolver::new(&ctx);

    let request = parse_node(r#"{"kind": "var", "line": 10, "children": ["request"]}"#).unwrap();
    assert_eq!(
        resolver.variable_union_type(&request).to_string(),
        "\\Vendor\\Foo\\Request"
    );

    let missing = parse_node(r#"{"kind": "var", "line": 11, "children": ["user"]}"#).unwrap();
    assert!(resolver.variable_union_type(&missing).is_empty());

    let superglobal = parse_node(r#"{"kind": "var", "line": 12, "children": ["_GET"]}"#).unwrap();
    assert!(resolver.variable_union_type(&superglobal).is_empty());

    let var_var = parse_node(
        r#"{"kind": "var", "line": 13, "children": [{"kind": "var", "children": ["k"]}]}"#,
    )
    .unwrap();
    assert_eq!(resolver.variable_union_type(&var_var), UnionType::mixed());

    let mut sink: Vec<Diagnostic> = Vec::new();
    resolver.drain_diagnostics_into(&mut sink);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].kind, DiagnosticKind::UndefinedVariable);
    assert_eq!(sink[0].line, 11);
    assert_eq!(sink[0].file, "src/App/Kernel.php");

    let rendered = serde_json::to_value(&sink[0]).unwrap();
    assert_eq!(rendered["code"], 1001);
    assert_eq!(rendered["message_text"], "Variable $user is undeclared");
}

#[test]
fn test_class_names_through_default_strategy() {
    let ctx = unit_context();
    let resolver = Resolver::new(&ctx);
    let known: KnownClasses = ["\\Vendor\\Foo", "\\App\\Kernel"].into_iter().collect();
    let strategy = KindDispatchStrategy::new(&known);

    let new_foo = parse_node(
        r#"{"kind": "new", "children": [{"kind": "name", "flags": 1, "children": ["Foo"]}, null]}"#,
    )
    .unwrap();
    assert_eq!(resolver.class_name(&new_foo, &strategy), "\\Vendor\\Foo");

    let static_call = parse_node(
        r#"{"kind": "static_call", "children": [{"kind": "name", "flags": 1, "children": ["static"]}, "make"]}"#,
    )
    .unwrap();
    assert_eq!(resolver.class_name(&static_call, &strategy), "\\App\\Kernel");

    let unknown_kind = parse_node(r#"{"kind": "yield_from", "children": []}"#).unwrap();
    assert_eq!(unknown_kind.kind, NodeKind::Unknown);
    assert_eq!(resolver.class_name(&unknown_kind, &strategy), "");
}

#[test]
fn test_property_declared_type_from_json() {
    let ctx = unit_context();
    let elem = parse_node(r#"{"kind": "prop_elem", "flags": 4, "line": 20, "children": ["$foo"]}"#)
        .unwrap();
    let ty = parse_node(
        r#"{"kind": "type_union", "children": [
            {"kind": "name", "flags": 1, "children": ["Foo"]},
            {"kind": "type", "flags": 1}
        ]}"#,
    )
    .unwrap();

    let mut prop = Property::from_node(&ctx, &elem).unwrap();
    assert_eq!(prop.name(), "foo");
    assert!(!prop.has_declared_union_type());

    prop.resolve_declared_type(Some(&Child::from(ty))).unwrap();
    assert_eq!(prop.declared_union_type().to_string(), "\\Vendor\\Foo|null");
    assert!(prop.declared_union_type().is_nullable());
}

#[test]
fn test_union_text_round_trips() {
    for text in ["", "int", "int|string", "?\\App\\Foo|null|\\Vendor\\Bar"] {
        assert_eq!(UnionType::from_string(text).to_string(), text);
    }
}
