//! Port mapping value objects
//!
//! A bound service projects the logical ports of a service model onto the
//! concrete ports of the component that provides it. One [`PortMapping`] is
//! recorded per service model the binding can be viewed as; together they
//! form the binding's [`PortMappings`] table.

use super::ids::ModelId;
use super::port::PortDirection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logical service port name to concrete component port name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping(BTreeMap<String, String>);

impl PortMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `service_port` is provided by `task_port`
    pub fn insert<S: Into<String>, T: Into<String>>(&mut self, service_port: S, task_port: T) {
        self.0.insert(service_port.into(), task_port.into());
    }

    /// Concrete port name for a logical port
    pub fn get(&self, service_port: &str) -> Option<&str> {
        self.0.get(service_port).map(String::as_str)
    }

    /// Whether a logical port has a mapping
    pub fn contains(&self, service_port: &str) -> bool {
        self.0.contains_key(service_port)
    }

    /// Iterate over `(service_port, task_port)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of mapped ports
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no port is mapped
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for PortMapping {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(s, t)| (s.into(), t.into()))
                .collect(),
        )
    }
}

/// Port mappings of a binding, keyed by the service model they present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMappings(BTreeMap<ModelId, PortMapping>);

impl PortMappings {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the mapping used when the binding is viewed as `service_model`
    pub fn insert(&mut self, service_model: ModelId, mapping: PortMapping) {
        self.0.insert(service_model, mapping);
    }

    /// Mapping recorded for `service_model`
    pub fn get(&self, service_model: ModelId) -> Option<&PortMapping> {
        self.0.get(&service_model)
    }

    /// Service models for which a mapping is recorded
    pub fn models(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.0.keys().copied()
    }

    /// Iterate over `(service_model, mapping)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (ModelId, &PortMapping)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Keep only the service models matching `keep`
    pub fn retain<F: FnMut(ModelId) -> bool>(&mut self, mut keep: F) {
        self.0.retain(|model, _| keep(*model));
    }

    /// Number of recorded views
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no view is recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Accessor for one logical port, resolved at service declaration time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortAccessor {
    /// Direction of the logical port
    pub direction: PortDirection,
    /// Name of the concrete component port
    pub task_port: String,
}

/// Logical port name to accessor, built when a service is declared
pub type PortAccessorTable = BTreeMap<String, PortAccessor>;
