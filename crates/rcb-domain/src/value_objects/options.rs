//! Service declaration options

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options of a `provides` declaration on a component model
///
/// # Example
///
/// ```
/// use rcb_domain::value_objects::ProvideOptions;
///
/// let options = ProvideOptions::new("image")
///     .with_port_mapping("frame", "camera_frame_out");
/// assert_eq!(options.name, "image");
/// assert!(options.slave_of.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvideOptions {
    /// Local name of the service within the component
    pub name: String,
    /// Full name of the master service, if this is a slave
    pub slave_of: Option<String>,
    /// Explicit logical-to-concrete port names; unlisted ports map by name
    #[serde(default)]
    pub port_mappings: BTreeMap<String, String>,
}

impl ProvideOptions {
    /// Declare a master service called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare the service as a slave of `master`
    pub fn slave_of(mut self, master: impl Into<String>) -> Self {
        self.slave_of = Some(master.into());
        self
    }

    /// Map the logical port `service_port` onto the component port `task_port`
    pub fn with_port_mapping(
        mut self,
        service_port: impl Into<String>,
        task_port: impl Into<String>,
    ) -> Self {
        self.port_mappings
            .insert(service_port.into(), task_port.into());
        self
    }
}

/// Options recorded with a dynamic slave declaration
///
/// The resolution rules never interpret them; they are kept for the
/// instantiation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicSlaveOptions {
    /// Free-form options
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl DynamicSlaveOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
