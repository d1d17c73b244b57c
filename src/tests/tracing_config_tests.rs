use super::*;

fn var(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}

#[test]
fn test_phz_log_wins_over_rust_log() {
    let config = TracingConfig::from_vars(var("phz_resolver=trace"), var("warn"), None);
    assert_eq!(config.directives(), Some("phz_resolver=trace"));

    let fallback = TracingConfig::from_vars(None, var("warn"), None);
    assert_eq!(fallback.directives(), Some("warn"));
}

#[test]
fn test_disabled_without_filter_variables() {
    let config = TracingConfig::from_vars(None, None, var("tree"));
    assert!(!config.is_enabled());
    assert!(config.filter().is_none());
    assert_eq!(config.format(), LogFormat::Tree);
    assert!(matches!(config.try_install(), Ok(false)));
}

#[test]
fn test_format_defaults_to_text() {
    let config = TracingConfig::from_vars(var("debug"), None, None);
    assert_eq!(config.format(), LogFormat::Text);
    assert_eq!(config, TracingConfig::from_vars(var("debug"), None, var("bogus")));
}

#[test]
fn test_filter_keeps_valid_directives() {
    let config = TracingConfig::from_vars(var("phz_resolver=trace,info"), None, None);
    let rendered = config.filter().map(|f| f.to_string()).unwrap_or_default();
    assert!(rendered.contains("phz_resolver=trace"), "{rendered}");
}

#[test]
fn test_install_is_global_and_once() {
    let config = TracingConfig::from_vars(var("phz=trace"), None, var("tree"));
    assert!(matches!(config.try_install(), Ok(true)));
    assert!(config.try_install().is_err());
    // The environment-driven entry point tolerates an installed subscriber.
    init_tracing();
}
