//! Unit tests for domain error types

use rcb_domain::Error;

#[test]
fn test_missing_definition_error() {
    let error = Error::missing_definition("base", "left_camera");
    match &error {
        Error::MissingDefinition { profile, name } => {
            assert_eq!(profile, "base");
            assert_eq!(name, "left_camera");
        }
        _ => panic!("Expected MissingDefinition error"),
    }
    assert_eq!(
        error.to_string(),
        "profile base has no definition called left_camera"
    );
}

#[test]
fn test_missing_mapping_error() {
    let error = Error::missing_mapping("model#4", "image");
    match error {
        Error::MissingMapping { service, binding } => {
            assert_eq!(service, "model#4");
            assert_eq!(binding, "image");
        }
        _ => panic!("Expected MissingMapping error"),
    }
}

#[test]
fn test_incompatible_error() {
    let error = Error::incompatible("image", "front_camera", "Cam");
    let display = error.to_string();
    assert!(display.contains("image"));
    assert!(display.contains("front_camera"));
    assert!(display.contains("Cam"));
}

#[test]
fn test_unsatisfiable_error() {
    let error = Error::unsatisfiable("role 'camera'");
    match error {
        Error::UnsatisfiableArgument { placeholder } => assert_eq!(placeholder, "role 'camera'"),
        _ => panic!("Expected UnsatisfiableArgument error"),
    }
}

#[test]
fn test_ambiguous_service_lists_candidates() {
    let error = Error::ambiguous_service(
        "Cam",
        "ImageSource",
        vec!["left".to_string(), "right".to_string()],
    );
    assert_eq!(
        error.to_string(),
        "multiple services of Cam fulfill ImageSource: left, right"
    );
}

#[test]
fn test_not_found_error() {
    let error = Error::not_found("model#12");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "model#12"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("duplicate service image");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "duplicate service image"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_configuration_error_keeps_source() {
    use std::error::Error as _;

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "rcb.toml");
    let error = Error::configuration_with_source("cannot read configuration", io);
    assert!(error.source().is_some());
    assert!(error.to_string().contains("cannot read configuration"));
}

#[test]
fn test_configuration_error_without_source() {
    use std::error::Error as _;

    let error = Error::configuration("bad level");
    assert!(error.source().is_none());
}

#[test]
fn test_infrastructure_error() {
    let error = Error::infrastructure("subscriber already installed");
    match &error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "subscriber already installed");
            assert!(source.is_none());
        }
        _ => panic!("Expected Infrastructure error"),
    }
    assert_eq!(
        error.to_string(),
        "Infrastructure error: subscriber already installed"
    );
}
