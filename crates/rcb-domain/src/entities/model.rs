//! Component and data service models
//!
//! Models are owned by a [`ModelRegistry`](crate::ports::ModelRegistry) and
//! refer to each other by [`ModelId`]. A submodel starts with a copy of its
//! parent's ports and remembers, for each of them, the name it had in the
//! parent; this is what lets a renamed port still be projected when the
//! submodel is viewed as its parent.

use crate::error::{Error, Result};
use crate::value_objects::{ModelId, Port};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether a model describes a concrete component or an abstract service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// A component (task context, device driver, composition)
    Component,
    /// A data service (interface) model
    DataService,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::DataService => write!(f, "data service"),
        }
    }
}

/// A component or data service model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    id: ModelId,
    name: String,
    kind: ModelKind,
    supermodel: Option<ModelId>,
    provided: Vec<ModelId>,
    ports: Vec<Port>,
    parent_port_names: BTreeMap<String, String>,
    private_specialization: bool,
}

impl Model {
    /// Create a root model
    pub fn new(id: ModelId, name: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            supermodel: None,
            provided: Vec::new(),
            ports: Vec::new(),
            parent_port_names: BTreeMap::new(),
            private_specialization: false,
        }
    }

    /// Create a submodel of `parent`, inheriting its ports
    pub fn new_submodel(id: ModelId, name: impl Into<String>, parent: &Model) -> Self {
        Self {
            id,
            name: name.into(),
            kind: parent.kind,
            supermodel: Some(parent.id),
            provided: Vec::new(),
            ports: parent.ports.clone(),
            parent_port_names: parent
                .ports
                .iter()
                .map(|p| (p.name.clone(), p.name.clone()))
                .collect(),
            private_specialization: false,
        }
    }

    /// Registry index of this model
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last `::`-separated segment of the name
    pub fn short_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Component or data service
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Whether this is a component model
    pub fn is_component(&self) -> bool {
        self.kind == ModelKind::Component
    }

    /// Whether this is a data service model
    pub fn is_data_service(&self) -> bool {
        self.kind == ModelKind::DataService
    }

    /// Direct parent model
    pub fn supermodel(&self) -> Option<ModelId> {
        self.supermodel
    }

    /// Service models directly provided (components) or included (services)
    pub fn provided(&self) -> &[ModelId] {
        &self.provided
    }

    /// Record that this model provides or includes `model`
    pub fn include(&mut self, model: ModelId) {
        if !self.provided.contains(&model) {
            self.provided.push(model);
        }
    }

    /// Whether this model is a specialization private to one task instance
    pub fn is_private_specialization(&self) -> bool {
        self.private_specialization
    }

    /// Flag this model as private to one task instance
    pub fn set_private_specialization(&mut self, private: bool) {
        self.private_specialization = private;
    }

    /// All ports, in declaration order
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Input ports, in declaration order
    pub fn input_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_input())
    }

    /// Output ports, in declaration order
    pub fn output_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_output())
    }

    /// Port called `name`, whatever its direction
    pub fn find_port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// Input port called `name`
    pub fn find_input_port(&self, name: &str) -> Option<&Port> {
        self.input_ports().find(|p| p.name == name)
    }

    /// Output port called `name`
    pub fn find_output_port(&self, name: &str) -> Option<&Port> {
        self.output_ports().find(|p| p.name == name)
    }

    /// Name in this model of the parent's port `parent_port`
    pub fn port_name_from_parent(&self, parent_port: &str) -> Option<&str> {
        self.parent_port_names.get(parent_port).map(String::as_str)
    }

    /// Declare a new port; port names are unique across directions
    pub fn add_port(&mut self, port: Port) -> Result<()> {
        if self.find_port(&port.name).is_some() {
            return Err(Error::invalid_argument(format!(
                "{} already has a port called {}",
                self.name, port.name
            )));
        }
        self.ports.push(port);
        Ok(())
    }

    /// Rename a port, keeping track of the name it had in the parent
    pub fn rename_port(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new {
            return Ok(());
        }
        if self.find_port(new).is_some() {
            return Err(Error::invalid_argument(format!(
                "cannot rename {old} to {new} on {}: {new} already exists",
                self.name
            )));
        }
        let name = self.name.clone();
        let port = self
            .ports
            .iter_mut()
            .find(|p| p.name == old)
            .ok_or_else(|| Error::not_found(format!("port {old} on {name}")))?;
        port.name = new.to_string();
        for own_name in self.parent_port_names.values_mut() {
            if own_name == old {
                *own_name = new.to_string();
            }
        }
        Ok(())
    }

    /// Narrow (or change) the data type of a port
    pub fn set_port_type(&mut self, port_name: &str, type_name: &str) -> Result<()> {
        let name = self.name.clone();
        let port = self
            .ports
            .iter_mut()
            .find(|p| p.name == port_name)
            .ok_or_else(|| Error::not_found(format!("port {port_name} on {name}")))?;
        port.type_name = type_name.to_string();
        Ok(())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
