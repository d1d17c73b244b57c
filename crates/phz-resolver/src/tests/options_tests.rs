use super::*;

#[test]
fn test_defaults_report_undefined_and_use_global_limit() {
    let options = ResolverOptions::default();
    assert!(options.report_undefined_variables);
    assert!(options.extra_superglobals.is_empty());
    assert_eq!(options.max_name_chain_depth, MAX_NAME_CHAIN_DEPTH);
}

#[test]
fn test_partial_json_keeps_remaining_defaults() {
    let options = ResolverOptions::from_json(r#"{ "extra_superglobals": ["config"] }"#)
        .expect("valid options");

    assert_eq!(options.extra_superglobals, vec!["config".to_string()]);
    assert!(options.report_undefined_variables);
    assert_eq!(options.max_name_chain_depth, MAX_NAME_CHAIN_DEPTH);
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(ResolverOptions::from_json(r#"{ "max_name_chain_depth": "deep" }"#).is_err());
}
