//! Robot definition
//!
//! Devices of a physical robot, keyed by role name. Profiles merge the robot
//! definitions of the profiles they use and turn them into the lowest
//! priority DI layer.

use crate::entities::dependency_injection::{DependencyInjection, Placeholder, Selection};
use crate::error::{Error, Result};
use crate::value_objects::ModelId;
use std::collections::BTreeMap;

/// One device of the robot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDefinition {
    /// Device (physical role) name
    pub name: String,
    /// Driver model handling the device
    pub driver: ModelId,
}

/// Set of devices of a robot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotDefinition {
    devices: BTreeMap<String, DeviceDefinition>,
}

impl RobotDefinition {
    /// Create an empty robot
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a device
    ///
    /// Re-declaring an identical device is a no-op; declaring a different
    /// driver for an existing role is an error.
    pub fn device(&mut self, name: impl Into<String>, driver: ModelId) -> Result<&DeviceDefinition> {
        let name = name.into();
        let device = DeviceDefinition {
            name: name.clone(),
            driver,
        };
        Self::check_collision(self.devices.get(&name), &device)?;
        Ok(self.devices.entry(name).or_insert(device))
    }

    /// Device declared for a role
    pub fn find_device(&self, name: &str) -> Option<&DeviceDefinition> {
        self.devices.get(name)
    }

    /// Iterate over the devices in role name order
    pub fn devices(&self) -> impl Iterator<Item = &DeviceDefinition> {
        self.devices.values()
    }

    /// Whether the robot declares no device
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Add the devices of `other` to this robot
    ///
    /// All collisions are checked before anything is merged, so a failed
    /// merge leaves this robot untouched.
    pub fn use_robot(&mut self, other: &RobotDefinition) -> Result<()> {
        for device in other.devices() {
            Self::check_collision(self.devices.get(&device.name), device)?;
        }
        for device in other.devices() {
            self.devices
                .entry(device.name.clone())
                .or_insert_with(|| device.clone());
        }
        Ok(())
    }

    /// DI layer mapping each device role to its device
    pub fn to_dependency_injection(&self) -> DependencyInjection {
        self.devices
            .values()
            .map(|device| {
                (
                    Placeholder::role(device.name.clone()),
                    Selection::Device {
                        name: device.name.clone(),
                        driver: device.driver,
                    },
                )
            })
            .collect()
    }

    fn check_collision(existing: Option<&DeviceDefinition>, device: &DeviceDefinition) -> Result<()> {
        match existing {
            Some(existing) if existing != device => Err(Error::invalid_argument(format!(
                "device {} is already driven by {}, cannot drive it with {}",
                device.name, existing.driver, device.driver
            ))),
            _ => Ok(()),
        }
    }
}
