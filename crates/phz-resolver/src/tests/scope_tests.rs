use super::*;

#[test]
fn test_membership_and_retrieval_are_separate() {
    let scope = Scope::new().with_variable("known", UnionType::empty());

    assert!(scope.has_variable("known"));
    assert_eq!(scope.variable("known"), Some(&UnionType::empty()));
    assert!(!scope.has_variable("missing"));
    assert!(scope.variable("missing").is_none());
}

#[test]
fn test_lookup_is_case_sensitive() {
    let scope = Scope::new().with_variable("user", UnionType::from_string("int"));
    assert!(scope.has_variable("user"));
    assert!(!scope.has_variable("User"));
}

#[test]
fn test_rebinding_replaces_type() {
    let mut scope = Scope::new();
    scope.add_variable("x", UnionType::from_string("int"));
    scope.add_variable("x", UnionType::from_string("string"));

    assert_eq!(scope.len(), 1);
    assert_eq!(scope.variable("x").map(ToString::to_string).as_deref(), Some("string"));
}

#[test]
fn test_clone_forks_independently() {
    let outer = Scope::new().with_variable("a", UnionType::from_string("int"));
    let inner = outer.clone().with_variable("b", UnionType::from_string("bool"));

    assert!(!outer.has_variable("b"));
    assert!(inner.has_variable("a"));
    assert!(inner.has_variable("b"));
}
