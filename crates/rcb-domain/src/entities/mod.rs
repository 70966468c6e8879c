//! Domain Entities
//!
//! Entities carry identity (a name, a full name, a registry index) and the
//! rules that operate on them.
//!
//! ## Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Model`] | Component or data service model, with its ports |
//! | [`DependencyInjection`] | One layer of placeholder to selection rules |
//! | [`DependencyInjectionContext`] | Stack of DI layers, last pushed wins |
//! | [`InstanceRequirements`] | What a definition asks the instantiation engine for |
//! | [`RobotDefinition`] | Devices of the robot, keyed by role |
//! | [`Profile`] | Named DI rules and definitions |
//! | [`BoundDataService`] | Service model as provided by a component model |
//! | [`SlaveDefinitionBuilder`] | Scoped declaration of slave services |
//! | [`DynamicSlaveDeclaration`] | Slaves a master can materialize on demand |

/// Service bindings and their port projections
pub mod bound_data_service;
/// DI layers and context stacks
pub mod dependency_injection;
/// On-demand slave services
pub mod dynamic_slaves;
/// Instance requirements
pub mod instance_requirements;
/// Component and data service models
pub mod model;
/// Profiles
pub mod profile;
/// Robot devices
pub mod robot;
/// Slave declaration builder
pub mod slave_builder;

pub use bound_data_service::{BoundDataService, TaskServiceBinding};
pub use dependency_injection::{
    DependencyInjection, DependencyInjectionContext, Placeholder, Selection,
};
pub use dynamic_slaves::{DynamicSlaveDeclaration, ServiceSpecialization, SpecializationBlock};
pub use instance_requirements::{InstanceRequirements, IntoInstanceRequirements};
pub use model::{Model, ModelKind};
pub use profile::Profile;
pub use robot::{DeviceDefinition, RobotDefinition};
pub use slave_builder::SlaveDefinitionBuilder;
