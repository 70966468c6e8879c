//! Unit tests for naming helpers

use rcb_domain::constants::{DEFAULT_MAX_SELECTION_DEPTH, slave_full_name, specialized_name};

#[test]
fn test_specialized_name() {
    assert_eq!(specialized_name("Cam", "needs-zoom"), "Cam<needs-zoom>");
}

#[test]
fn test_slave_full_name() {
    assert_eq!(slave_full_name("image", "zoom"), "image.zoom");
    assert_eq!(slave_full_name("image.zoom", "level"), "image.zoom.level");
}

#[test]
fn test_default_selection_depth_is_positive() {
    assert!(DEFAULT_MAX_SELECTION_DEPTH > 0);
}
