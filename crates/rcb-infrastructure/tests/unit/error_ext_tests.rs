//! Error extension tests

use rcb_domain::Error;
use rcb_infrastructure::ErrorContext;
use std::io;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_io_context() {
    match failing().io_context("Failed to read models") {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "Failed to read models: no such file");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    assert!(matches!(
        failing().config_context("Bad configuration"),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_lazy_context() {
    match failing().with_context(|| format!("step {}", 3)) {
        Err(Error::Infrastructure { message, .. }) => assert!(message.starts_with("step 3")),
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_context_passes_ok_through() {
    let value: Result<u8, io::Error> = Ok(7);
    assert_eq!(value.context("unused").expect("ok value"), 7);
}
