//! Unit tests for the robot definition

use rcb_domain::Error;
use rcb_domain::entities::{Placeholder, RobotDefinition, Selection};
use rcb_domain::value_objects::ModelId;

#[test]
fn test_device_declaration() {
    let mut robot = RobotDefinition::new();
    let device = robot
        .device("front_camera", ModelId::new(1))
        .expect("device should be declared");
    assert_eq!(device.name, "front_camera");
    assert!(robot.find_device("front_camera").is_some());
}

#[test]
fn test_redeclaring_same_device_is_noop() {
    let mut robot = RobotDefinition::new();
    robot.device("front_camera", ModelId::new(1)).expect("first declaration");
    robot.device("front_camera", ModelId::new(1)).expect("same declaration");
    assert_eq!(robot.devices().count(), 1);
}

#[test]
fn test_conflicting_device_rejected() {
    let mut robot = RobotDefinition::new();
    robot.device("front_camera", ModelId::new(1)).expect("first declaration");
    let result = robot.device("front_camera", ModelId::new(2));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_use_robot_augments() {
    let mut base = RobotDefinition::new();
    base.device("front_camera", ModelId::new(1)).expect("device");
    let mut other = RobotDefinition::new();
    other.device("laser", ModelId::new(2)).expect("device");
    other.device("front_camera", ModelId::new(1)).expect("device");

    base.use_robot(&other).expect("merge should succeed");
    assert_eq!(base.devices().count(), 2);
}

#[test]
fn test_failed_use_robot_leaves_robot_untouched() {
    let mut base = RobotDefinition::new();
    base.device("front_camera", ModelId::new(1)).expect("device");
    let mut other = RobotDefinition::new();
    other.device("aaa_laser", ModelId::new(2)).expect("device");
    other.device("front_camera", ModelId::new(3)).expect("device");

    assert!(base.use_robot(&other).is_err());
    assert!(base.find_device("aaa_laser").is_none());
}

#[test]
fn test_to_dependency_injection() {
    let mut robot = RobotDefinition::new();
    robot.device("laser", ModelId::new(2)).expect("device");
    let layer = robot.to_dependency_injection();

    assert_eq!(
        layer.get(&Placeholder::role("laser")),
        Some(&Selection::Device {
            name: "laser".to_string(),
            driver: ModelId::new(2),
        })
    );
}
