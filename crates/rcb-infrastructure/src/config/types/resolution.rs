//! Model resolution configuration types

use rcb_domain::constants::DEFAULT_MAX_SELECTION_DEPTH;
use rcb_providers::RegistryOptions;
use serde::{Deserialize, Serialize};

/// Model resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Service declarations require identical port type names
    pub strict_port_types: bool,

    /// Dynamic slaves may create missing ports on private specializations
    pub allow_dynamic_ports: bool,

    /// Maximum number of role aliases followed when resolving a selection
    pub max_selection_depth: usize,
}

impl ResolutionConfig {
    /// Options of the model registry built from this configuration
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            strict_port_types: self.strict_port_types,
            allow_dynamic_ports: self.allow_dynamic_ports,
        }
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        let registry = RegistryOptions::default();
        Self {
            strict_port_types: registry.strict_port_types,
            allow_dynamic_ports: registry.allow_dynamic_ports,
            max_selection_depth: DEFAULT_MAX_SELECTION_DEPTH,
        }
    }
}
