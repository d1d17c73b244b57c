//! Tests for the JSON form of the AST contract.

use phz_ast::{Child, Node, NodeKind, name_flags};

#[test]
fn test_deserialize_nested_variable_tree() {
    let json = r#"{
        "kind": "var",
        "line": 9,
        "children": [{ "kind": "var", "line": 9, "children": ["inner"] }]
    }"#;
    let node: Node = serde_json::from_str(json).expect("valid node json");

    assert_eq!(node.kind, NodeKind::Var);
    assert_eq!(node.flags, 0);
    let inner = node.child_node(0).expect("nested variable");
    assert_eq!(inner.kind, NodeKind::Var);
    assert_eq!(inner.child_text(0).as_deref(), Some("inner"));
}

#[test]
fn test_deserialize_scalar_children_and_nulls() {
    let json = r#"{ "kind": "array", "children": ["s", 42, 2.5, null] }"#;
    let node: Node = serde_json::from_str(json).expect("valid node json");

    assert_eq!(node.children.len(), 4);
    assert_eq!(node.child(0), Some(&Child::Str("s".to_string())));
    assert_eq!(node.child(1), Some(&Child::Int(42)));
    assert_eq!(node.child(2), Some(&Child::Float(2.5)));
    assert!(node.child(3).is_none());
}

#[test]
fn test_unrecognized_kind_is_unknown() {
    let json = r#"{ "kind": "closure_uses", "children": [] }"#;
    let node: Node = serde_json::from_str(json).expect("valid node json");
    assert_eq!(node.kind, NodeKind::Unknown);
}

#[test]
fn test_name_node_survives_serialization() {
    let node = Node::name("Foo", name_flags::NAME_NOT_FQ, 3);
    let text = serde_json::to_string(&node).expect("serialize");
    let back: Node = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, node);
}
