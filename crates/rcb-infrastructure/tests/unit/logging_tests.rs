//! Logging Tests

use rcb_domain::Error;
use rcb_infrastructure::config::LoggingConfig;
use rcb_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").expect("level"), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").expect("level"), Level::DEBUG);
    assert_eq!(parse_log_level("warning").expect("level"), Level::WARN);
    assert_eq!(parse_log_level("error").expect("level"), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    assert!(matches!(
        parse_log_level("verbose"),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_init_logging_only_once() {
    let config = LoggingConfig::default();
    let _ = init_logging(&config);

    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}
