//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ModelId`] | Index of a component or service model in a registry |
//! | [`ProfileId`] | Index of a profile in a profile resolver |
//! | [`Port`] | Named, typed, directed port of a model |
//! | [`PortMapping`] | Logical service port to concrete component port |
//! | [`PortMappings`] | Port mappings of a binding, one per presented model |
//! | [`ProvideOptions`] | Options of a service declaration |
//! | [`TaskRef`] | Minimal task instance handle |

/// Model and profile identifiers
pub mod ids;
/// Service declaration options
pub mod options;
/// Ports
pub mod port;
/// Port mappings and accessor tables
pub mod port_mapping;
/// Task handles
pub mod task;

// Re-export commonly used value objects
pub use ids::{ModelId, ProfileId};
pub use options::{DynamicSlaveOptions, ProvideOptions};
pub use port::{Port, PortDirection};
pub use port_mapping::{PortAccessor, PortAccessorTable, PortMapping, PortMappings};
pub use task::TaskRef;
