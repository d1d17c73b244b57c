//! Name qualification through the resolver: aliases, namespaces, and
//! fully-qualified passthrough.

use phz_ast::{Child, Node, NodeKind, name_flags::NAME_NOT_FQ};
use phz_resolver::{AliasKind, Context, ResolveError, Resolver};

fn app_context() -> Context {
    Context::new("src/App/Kernel.php")
        .with_namespace("\\App")
        .with_alias(AliasKind::Class, "Foo", "\\Vendor\\Foo")
}

fn relative(text: &str) -> Node {
    Node::name(text, NAME_NOT_FQ, 3)
}

#[test]
fn test_alias_prefix_and_namespace_fallback() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);

    assert_eq!(resolver.qualified_name(&relative("Foo")).unwrap(), "\\Vendor\\Foo");
    assert_eq!(
        resolver.qualified_name(&relative("Foo\\Bar")).unwrap(),
        "\\Vendor\\Foo\\Bar"
    );
    assert_eq!(resolver.qualified_name(&relative("Baz")).unwrap(), "\\App\\Baz");
    assert!(resolver.diagnostics().is_empty());
}

#[test]
fn test_fully_qualified_name_is_returned_unchanged() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);

    let fq = Node::name("\\Other\\Baz", 0, 3);
    assert_eq!(resolver.qualified_name(&fq).unwrap(), "\\Other\\Baz");

    // Even when the text matches an alias key.
    let fq_alias = Node::name("Foo", 0, 3);
    assert_eq!(resolver.qualified_name(&fq_alias).unwrap(), "Foo");
}

#[test]
fn test_exact_alias_wins_over_prefix_alias() {
    let ctx = app_context().with_alias(AliasKind::Class, "Foo\\Bar", "\\Elsewhere\\Bar");
    let mut resolver = Resolver::new(&ctx);

    assert_eq!(
        resolver.qualified_name(&relative("Foo\\Bar")).unwrap(),
        "\\Elsewhere\\Bar"
    );
    assert_eq!(
        resolver.qualified_name(&relative("Foo\\Qux")).unwrap(),
        "\\Vendor\\Foo\\Qux"
    );
}

#[test]
fn test_prefix_rule_matches_first_segment_only() {
    let ctx = app_context().with_alias(AliasKind::Class, "Bar", "\\Never\\Used");
    let mut resolver = Resolver::new(&ctx);

    // "Bar" is the second segment here; only "Foo" is looked up.
    assert_eq!(
        resolver.qualified_name(&relative("Foo\\Bar\\Baz")).unwrap(),
        "\\Vendor\\Foo\\Bar\\Baz"
    );
    // First segment unaliased: fall back to the namespace.
    assert_eq!(
        resolver.qualified_name(&relative("Qux\\Bar")).unwrap(),
        "\\App\\Qux\\Bar"
    );
}

#[test]
fn test_native_type_names_are_not_namespaced() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);

    for native in ["int", "String", "iterable", "mixed", "static"] {
        assert_eq!(resolver.qualified_name(&relative(native)).unwrap(), native);
    }
}

#[test]
fn test_root_namespace_does_not_double_separator() {
    let ctx = Context::new("a.php");
    let mut resolver = Resolver::new(&ctx);
    assert_eq!(resolver.qualified_name(&relative("Baz")).unwrap(), "\\Baz");
    assert_eq!(
        resolver.qualified_name(&relative("Http\\Request")).unwrap(),
        "\\Http\\Request"
    );
}

#[test]
fn test_alias_keys_are_case_sensitive() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);
    assert_eq!(resolver.qualified_name(&relative("foo")).unwrap(), "\\App\\foo");
}

#[test]
fn test_function_and_constant_aliases_use_their_own_tables() {
    let ctx = app_context()
        .with_alias(AliasKind::Function, "helper", "\\Vendor\\helper")
        .with_alias(AliasKind::Constant, "VERSION", "\\Vendor\\VERSION");
    let resolver = Resolver::new(&ctx);

    assert_eq!(
        resolver.qualified_function_name(&relative("helper")).unwrap(),
        "\\Vendor\\helper"
    );
    assert_eq!(
        resolver.qualified_constant_name(&relative("VERSION")).unwrap(),
        "\\Vendor\\VERSION"
    );
    // The class alias table does not leak into function lookups.
    assert_eq!(
        resolver.qualified_function_name(&relative("Foo")).unwrap(),
        "\\App\\Foo"
    );
    // Native-name shortcut applies to class names only.
    assert_eq!(
        resolver.qualified_function_name(&relative("array")).unwrap(),
        "\\App\\array"
    );
}

#[test]
fn test_non_name_node_resolves_to_its_union_type_text() {
    let ctx = Context::new("a.php");
    let mut resolver = Resolver::new(&ctx);

    let nullable = Node::new(
        NodeKind::NullableType,
        0,
        1,
        vec![Some(Child::from(Node::type_keyword(
            phz_ast::type_flags::TYPE_STRING,
            1,
        )))],
    );
    assert_eq!(resolver.qualified_name(&nullable).unwrap(), "?string");

    // Unsupported expression kinds resolve to the empty union's text.
    let call = Node::new(NodeKind::Call, 0, 1, vec![]);
    assert_eq!(resolver.qualified_name(&call).unwrap(), "");
}

#[test]
fn test_name_without_text_is_a_structural_error() {
    let ctx = Context::new("a.php");
    let mut resolver = Resolver::new(&ctx);
    let empty = Node::new(NodeKind::Name, NAME_NOT_FQ, 9, vec![None]);

    let err = resolver.qualified_name(&empty).unwrap_err();
    assert_eq!(
        err,
        ResolveError::MissingChild {
            kind: NodeKind::Name,
            index: 0,
            line: 9
        }
    );
    assert_eq!(err.line(), 9);
}

#[test]
fn test_qualified_names_keeps_order_and_skips_absent_entries() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);

    let list = Child::from(Node::new(
        NodeKind::NameList,
        0,
        4,
        vec![
            Some(Child::from(relative("Foo"))),
            None,
            Some(Child::from(relative("Baz"))),
            Some(Child::from("\\Verbatim\\Leaf")),
        ],
    ));
    assert_eq!(
        resolver.qualified_names(Some(&list)).unwrap(),
        vec!["\\Vendor\\Foo", "\\App\\Baz", "\\Verbatim\\Leaf"]
    );
}

#[test]
fn test_qualified_names_of_missing_or_scalar_list_is_empty() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);

    assert!(resolver.qualified_names(None).unwrap().is_empty());
    assert!(resolver.qualified_names(Some(&Child::from("Foo"))).unwrap().is_empty());

    let empty_list = Child::from(Node::new(NodeKind::NameList, 0, 1, vec![]));
    assert!(resolver.qualified_names(Some(&empty_list)).unwrap().is_empty());
}

#[test]
fn test_qualified_names_propagates_structural_errors() {
    let ctx = app_context();
    let mut resolver = Resolver::new(&ctx);
    let list = Child::from(Node::new(
        NodeKind::NameList,
        0,
        2,
        vec![
            Some(Child::from(relative("Foo"))),
            Some(Child::from(Node::new(NodeKind::Name, NAME_NOT_FQ, 2, vec![]))),
        ],
    ));
    assert!(matches!(
        resolver.qualified_names(Some(&list)),
        Err(ResolveError::MissingChild { .. })
    ));
}
