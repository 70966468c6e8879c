//! In-memory model registry
//!
//! Stores component and data service models in a vector indexed by
//! [`ModelId`], and the bound services of each component model in
//! declaration order. Nothing is persisted; models are expected to be
//! declared again on every start.

use crate::constants::{
    DEFAULT_ALLOW_DYNAMIC_PORTS, DEFAULT_STRICT_PORT_TYPES, REGISTRY_PROVIDER_IN_MEMORY,
};
use crate::models::projection;
use rcb_domain::constants::slave_full_name;
use rcb_domain::entities::{BoundDataService, Model, ModelKind};
use rcb_domain::error::{Error, Result};
use rcb_domain::ports::ModelRegistry;
use rcb_domain::value_objects::{
    ModelId, Port, PortAccessor, PortAccessorTable, PortMapping, ProvideOptions,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Behaviour switches of a model registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryOptions {
    /// Require identical type names between service and component ports
    pub strict_port_types: bool,
    /// Let dynamic services create missing ports on private specializations
    pub allow_dynamic_ports: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            strict_port_types: DEFAULT_STRICT_PORT_TYPES,
            allow_dynamic_ports: DEFAULT_ALLOW_DYNAMIC_PORTS,
        }
    }
}

/// Models and services as they were when a savepoint was opened
#[derive(Debug, Clone)]
struct Snapshot {
    models: Vec<Model>,
    services: HashMap<ModelId, Vec<BoundDataService>>,
}

/// In-memory model registry
///
/// Models are only removed by rolling back to a savepoint, so a [`ModelId`]
/// handed out outside of one stays valid for the registry's whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModelRegistry {
    models: Vec<Model>,
    services: HashMap<ModelId, Vec<BoundDataService>>,
    options: RegistryOptions,
    savepoints: Vec<Snapshot>,
}

impl InMemoryModelRegistry {
    /// Create an empty registry with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given options
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Options this registry was created with
    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Name of this registry implementation
    pub fn provider_name(&self) -> &str {
        REGISTRY_PROVIDER_IN_MEMORY
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model was declared
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// All models, in declaration order
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    /// First model called `name`
    pub fn find_by_name(&self, name: &str) -> Option<ModelId> {
        self.models.iter().find(|m| m.name() == name).map(Model::id)
    }

    /// Declare a root component model
    pub fn component_model(&mut self, name: &str) -> Result<ModelId> {
        self.add_root(name, ModelKind::Component)
    }

    /// Declare a root data service model
    pub fn data_service_model(&mut self, name: &str) -> Result<ModelId> {
        self.add_root(name, ModelKind::DataService)
    }

    /// Make the data service `service` include the data service `included`
    ///
    /// Ports of `included` missing from `service` are added to it; a port
    /// present in both must agree on direction and type.
    pub fn include(&mut self, service: ModelId, included: ModelId) -> Result<()> {
        if service == included || self.fullfills(included, &[service]) {
            return Err(Error::invalid_argument(format!(
                "{} cannot include {}: inclusion cycle",
                self.name(service)?,
                self.name(included)?
            )));
        }
        self.expect_kind(service, ModelKind::DataService)?;
        self.expect_kind(included, ModelKind::DataService)?;

        let mut missing = Vec::new();
        {
            let target = self.model(service)?;
            for port in self.model(included)?.ports() {
                match target.find_port(&port.name) {
                    Some(existing) if existing.direction != port.direction
                        || existing.type_name != port.type_name =>
                    {
                        return Err(Error::invalid_argument(format!(
                            "{} cannot include {}: port {} conflicts",
                            target.name(),
                            self.name(included)?,
                            port.name
                        )));
                    }
                    Some(_) => {}
                    None => missing.push(port.clone()),
                }
            }
        }

        let target = self.model_mut(service)?;
        for port in missing {
            target.add_port(port)?;
        }
        target.include(included);
        Ok(())
    }

    fn add_root(&mut self, name: &str, kind: ModelKind) -> Result<ModelId> {
        if name.is_empty() {
            return Err(Error::invalid_argument("model names cannot be empty"));
        }
        if self.find_by_name(name).is_some() {
            return Err(Error::invalid_argument(format!(
                "a model called {name} is already registered"
            )));
        }
        let id = ModelId::new(self.models.len());
        self.models.push(Model::new(id, name, kind));
        debug!(model = %name, %kind, "registered model");
        Ok(id)
    }

    fn expect_kind(&self, id: ModelId, kind: ModelKind) -> Result<()> {
        let model = self.model(id)?;
        if model.kind() == kind {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!(
                "{} is a {}, expected a {kind}",
                model.name(),
                model.kind()
            )))
        }
    }

    /// Map the ports of `service_model` onto `component`
    ///
    /// Returns the mapping and the component ports that would have to be
    /// created for it to be complete.
    fn direct_mapping(
        &self,
        component: ModelId,
        service_model: ModelId,
        explicit: &BTreeMap<String, String>,
    ) -> Result<(PortMapping, Vec<Port>)> {
        let service = self.model(service_model)?;
        if let Some(unknown) = explicit.keys().find(|name| service.find_port(name).is_none()) {
            return Err(Error::invalid_argument(format!(
                "{} has no port called {unknown}",
                service.name()
            )));
        }

        let component = self.model(component)?;
        let mut mapping = PortMapping::new();
        let mut missing = Vec::new();
        for port in service.ports() {
            let task_port = explicit
                .get(&port.name)
                .cloned()
                .unwrap_or_else(|| port.name.clone());
            match component.find_port(&task_port) {
                Some(found) if found.direction != port.direction => {
                    return Err(Error::invalid_argument(format!(
                        "cannot map {} port {} of {} onto {} port {} of {}",
                        port.direction,
                        port.name,
                        service.name(),
                        found.direction,
                        found.name,
                        component.name()
                    )));
                }
                Some(found)
                    if self.options.strict_port_types && found.type_name != port.type_name =>
                {
                    return Err(Error::invalid_argument(format!(
                        "port {} of {} has type {}, but {} of {} has type {}",
                        port.name,
                        service.name(),
                        port.type_name,
                        found.name,
                        component.name(),
                        found.type_name
                    )));
                }
                Some(_) => {}
                None => missing.push(Port {
                    name: task_port.clone(),
                    type_name: port.type_name.clone(),
                    direction: port.direction,
                }),
            }
            mapping.insert(port.name.clone(), task_port);
        }
        Ok((mapping, missing))
    }

    fn declare_service(
        &mut self,
        component: ModelId,
        service_model: ModelId,
        options: ProvideOptions,
        dynamic: bool,
    ) -> Result<BoundDataService> {
        self.expect_kind(component, ModelKind::Component)?;
        self.expect_kind(service_model, ModelKind::DataService)?;
        if options.name.is_empty() {
            return Err(Error::invalid_argument("service names cannot be empty"));
        }
        if let Some(master) = &options.slave_of {
            self.data_service(component, master)?;
        }
        let full_name = match &options.slave_of {
            Some(master) => slave_full_name(master, &options.name),
            None => options.name.clone(),
        };
        if self.find_data_service(component, &full_name).is_some() {
            return Err(Error::invalid_argument(format!(
                "{} already provides a service called {full_name}",
                self.name(component)?
            )));
        }

        let (direct, missing) =
            self.direct_mapping(component, service_model, &options.port_mappings)?;
        if !missing.is_empty() {
            let may_create = dynamic
                && self.options.allow_dynamic_ports
                && self.is_private_specialization(component);
            if !may_create {
                let names: Vec<&str> = missing.iter().map(|p| p.name.as_str()).collect();
                return Err(Error::invalid_argument(format!(
                    "{} cannot provide {full_name}: missing ports {}",
                    self.name(component)?,
                    names.join(", ")
                )));
            }
            let target = self.model_mut(component)?;
            for port in missing {
                debug!(port = %port, "creating port for dynamic service");
                target.add_port(port)?;
            }
        }

        let port_mappings = projection::fullfilled_mappings(&*self, service_model, &direct);
        let mut port_accessors = PortAccessorTable::new();
        for port in self.model(service_model)?.ports() {
            if let Some(task_port) = direct.get(&port.name) {
                port_accessors.insert(
                    port.name.clone(),
                    PortAccessor {
                        direction: port.direction,
                        task_port: task_port.to_string(),
                    },
                );
            }
        }

        let service = BoundDataService::new(
            options.name,
            component,
            options.slave_of,
            service_model,
            port_mappings,
            port_accessors,
        );
        self.model_mut(component)?.include(service_model);
        self.services
            .entry(component)
            .or_default()
            .push(service.clone());
        debug!(
            component = %component,
            service = %service.full_name(),
            model = %service_model,
            "declared data service"
        );
        Ok(service)
    }
}

impl ModelRegistry for InMemoryModelRegistry {
    fn model(&self, id: ModelId) -> Result<&Model> {
        self.models
            .get(id.index())
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    fn model_mut(&mut self, id: ModelId) -> Result<&mut Model> {
        self.models
            .get_mut(id.index())
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    fn new_submodel(&mut self, parent: ModelId, name: &str) -> Result<ModelId> {
        let id = ModelId::new(self.models.len());
        let model = Model::new_submodel(id, name, self.model(parent)?);
        let is_component = model.is_component();
        self.models.push(model);

        if is_component {
            let inherited: Vec<BoundDataService> = self
                .each_data_service(parent)
                .into_iter()
                .map(|srv| srv.overload(id))
                .collect();
            if !inherited.is_empty() {
                self.services.insert(id, inherited);
            }
        }
        Ok(id)
    }

    fn specialize(&mut self, component: ModelId, name: &str) -> Result<ModelId> {
        self.expect_kind(component, ModelKind::Component)?;
        let id = self.new_submodel(component, name)?;
        self.model_mut(id)?.set_private_specialization(true);
        Ok(id)
    }

    fn provides(
        &mut self,
        component: ModelId,
        service_model: ModelId,
        options: ProvideOptions,
    ) -> Result<BoundDataService> {
        self.declare_service(component, service_model, options, false)
    }

    fn require_dynamic_service(
        &mut self,
        component: ModelId,
        service_model: ModelId,
        options: ProvideOptions,
    ) -> Result<BoundDataService> {
        self.declare_service(component, service_model, options, true)
    }

    fn each_data_service(&self, component: ModelId) -> Vec<&BoundDataService> {
        self.services
            .get(&component)
            .map(|services| services.iter().collect())
            .unwrap_or_default()
    }

    fn data_service_mut(
        &mut self,
        component: ModelId,
        full_name: &str,
    ) -> Option<&mut BoundDataService> {
        self.services
            .get_mut(&component)?
            .iter_mut()
            .find(|srv| srv.full_name() == full_name)
    }

    fn savepoint(&mut self) {
        self.savepoints.push(Snapshot {
            models: self.models.clone(),
            services: self.services.clone(),
        });
    }

    fn release_savepoint(&mut self) {
        self.savepoints.pop();
    }

    fn rollback_to_savepoint(&mut self) {
        if let Some(snapshot) = self.savepoints.pop() {
            debug!(
                dropped_models = self.models.len().saturating_sub(snapshot.models.len()),
                "rolled back to savepoint"
            );
            self.models = snapshot.models;
            self.services = snapshot.services;
        }
    }
}
