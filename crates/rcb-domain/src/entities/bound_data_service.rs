//! Bound data services
//!
//! A [`BoundDataService`] is a data service model as provided by one
//! component model. It carries, for every service model it can be viewed
//! as, the table translating that model's logical port names into the
//! component's concrete port names.
//!
//! Bindings are values. [`overload`](BoundDataService::overload) and
//! [`as_service`](BoundDataService::as_service) return new bindings and
//! never touch the original. The component model and the master service are
//! referenced by id and by name only; the registry owns them.

use crate::constants::{SERVICE_SHORT_NAME_SEPARATOR, slave_full_name};
use crate::entities::dynamic_slaves::DynamicSlaveDeclaration;
use crate::entities::model::ModelKind;
use crate::entities::slave_builder::SlaveDefinitionBuilder;
use crate::error::{Error, Result};
use crate::ports::{ModelRegistry, TaskInstance};
use crate::value_objects::{
    ModelId, Port, PortAccessor, PortAccessorTable, PortDirection, PortMapping, PortMappings,
};
use std::fmt;

/// A data service model as provided by a component model
#[derive(Debug, Clone)]
pub struct BoundDataService {
    name: String,
    full_name: String,
    master: Option<String>,
    component_model: ModelId,
    model: ModelId,
    port_mappings: PortMappings,
    port_accessors: PortAccessorTable,
    declared_dynamic_slaves: Vec<DynamicSlaveDeclaration>,
}

impl BoundDataService {
    /// Create a binding
    ///
    /// `master` is the full name of the master service for a slave, `None`
    /// for a master service.
    pub fn new(
        name: impl Into<String>,
        component_model: ModelId,
        master: Option<String>,
        model: ModelId,
        port_mappings: PortMappings,
        port_accessors: PortAccessorTable,
    ) -> Self {
        let name = name.into();
        let full_name = match &master {
            Some(master) => slave_full_name(master, &name),
            None => name.clone(),
        };
        Self {
            name,
            full_name,
            master,
            component_model,
            model,
            port_mappings,
            port_accessors,
            declared_dynamic_slaves: Vec::new(),
        }
    }

    /// Local name of the service
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the service on its component, e.g. `image.zoom` for a slave
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Full name of the master service, `None` for a master
    pub fn master(&self) -> Option<&str> {
        self.master.as_deref()
    }

    /// Whether this is a master service
    pub fn is_master(&self) -> bool {
        self.master.is_none()
    }

    /// Component model providing the service
    pub fn component_model(&self) -> ModelId {
        self.component_model
    }

    /// Service model this binding currently presents
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// All recorded port mapping tables
    pub fn port_mappings(&self) -> &PortMappings {
        &self.port_mappings
    }

    /// Logical port accessors resolved at declaration time
    pub fn port_accessors(&self) -> &PortAccessorTable {
        &self.port_accessors
    }

    /// Dynamic slaves declared on this service, in declaration order
    pub fn declared_dynamic_slaves(&self) -> &[DynamicSlaveDeclaration] {
        &self.declared_dynamic_slaves
    }

    pub(crate) fn declared_dynamic_slaves_mut(&mut self) -> &mut Vec<DynamicSlaveDeclaration> {
        &mut self.declared_dynamic_slaves
    }

    /// `Component:full_name`, e.g. `Cam:image`
    pub fn short_name(&self, registry: &dyn ModelRegistry) -> Result<String> {
        let component = registry.model(self.component_model)?;
        Ok(format!(
            "{}{SERVICE_SHORT_NAME_SEPARATOR}{}",
            component.short_name(),
            self.full_name
        ))
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Same binding, provided by `component_model`
    pub fn overload(&self, component_model: ModelId) -> Self {
        Self {
            component_model,
            ..self.clone()
        }
    }

    /// Same binding, presented as `service_model`
    ///
    /// Only the port mapping tables of models `service_model` still
    /// fulfills are kept.
    pub fn as_service(&self, registry: &dyn ModelRegistry, service_model: ModelId) -> Self {
        let mut result = Self {
            model: service_model,
            ..self.clone()
        };
        result
            .port_mappings
            .retain(|key| registry.fullfills(service_model, &[key]));
        result
    }

    /// Whether this binding fulfills every model of `targets`
    ///
    /// Component models are checked against the providing component, data
    /// service models against the presented service model. An empty set of
    /// either kind is trivially fulfilled.
    pub fn fullfills(&self, registry: &dyn ModelRegistry, targets: &[ModelId]) -> bool {
        let (components, services): (Vec<ModelId>, Vec<ModelId>) = targets
            .iter()
            .copied()
            .partition(|&target| matches!(registry.kind(target), Ok(ModelKind::Component)));
        (components.is_empty() || registry.fullfills(self.component_model, &components))
            && (services.is_empty() || registry.fullfills(self.model, &services))
    }

    /// Every model the presented service model fulfills
    pub fn each_fullfilled_model(&self, registry: &dyn ModelRegistry) -> Vec<ModelId> {
        registry.fullfilled_models(self.model)
    }

    // ------------------------------------------------------------------
    // Port mappings
    // ------------------------------------------------------------------

    /// Port name mapping for the view as `service_model`
    pub fn port_mappings_for(&self, service_model: ModelId) -> Result<&PortMapping> {
        self.port_mappings
            .get(service_model)
            .ok_or_else(|| Error::missing_mapping(service_model.to_string(), self.to_string()))
    }

    /// Like [`port_mappings_for`](Self::port_mappings_for), naming the
    /// service model and the binding (`Cam:image`) on error
    pub fn named_port_mappings_for(
        &self,
        registry: &dyn ModelRegistry,
        service_model: ModelId,
    ) -> Result<&PortMapping> {
        self.port_mappings.get(service_model).ok_or_else(|| {
            let service = registry
                .name(service_model)
                .map_or_else(|_| service_model.to_string(), str::to_string);
            Error::missing_mapping(service, self.described(registry))
        })
    }

    fn described(&self, registry: &dyn ModelRegistry) -> String {
        self.short_name(registry).unwrap_or_else(|_| self.to_string())
    }

    /// Port name mapping for the presented model
    pub fn port_mappings_for_task(&self) -> Result<&PortMapping> {
        self.port_mappings_for(self.model)
    }

    // ------------------------------------------------------------------
    // Logical ports
    // ------------------------------------------------------------------

    /// Logical port `name` of the presented service model
    pub fn find_port<'r>(&self, registry: &'r dyn ModelRegistry, name: &str) -> Option<&'r Port> {
        self.find_output_port(registry, name)
            .or_else(|| self.find_input_port(registry, name))
    }

    /// Logical input port `name` of the presented service model
    pub fn find_input_port<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        name: &str,
    ) -> Option<&'r Port> {
        registry.find_input_port(self.model, name)
    }

    /// Logical output port `name` of the presented service model
    pub fn find_output_port<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        name: &str,
    ) -> Option<&'r Port> {
        registry.find_output_port(self.model, name)
    }

    /// Whether the presented model has an input port `name`
    pub fn has_input_port(&self, registry: &dyn ModelRegistry, name: &str) -> bool {
        self.find_input_port(registry, name).is_some()
    }

    /// Whether the presented model has an output port `name`
    pub fn has_output_port(&self, registry: &dyn ModelRegistry, name: &str) -> bool {
        self.find_output_port(registry, name).is_some()
    }

    /// Logical input ports, optionally followed by the ones of the slaves
    pub fn each_input_port<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        with_slaves: bool,
    ) -> Vec<&'r Port> {
        let mut ports = registry.input_ports(self.model);
        if with_slaves {
            for (_, slave) in self.each_slave(registry) {
                ports.extend(registry.input_ports(slave.model));
            }
        }
        ports
    }

    /// Logical output ports, optionally followed by the ones of the slaves
    pub fn each_output_port<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        with_slaves: bool,
    ) -> Vec<&'r Port> {
        let mut ports = registry.output_ports(self.model);
        if with_slaves {
            for (_, slave) in self.each_slave(registry) {
                ports.extend(registry.output_ports(slave.model));
            }
        }
        ports
    }

    // ------------------------------------------------------------------
    // Concrete ports
    // ------------------------------------------------------------------

    /// Component input ports backing the logical input ports
    ///
    /// Fails upfront if the presented model has no mapping table; each item
    /// fails if its logical port has no mapping or the mapped port is
    /// missing on the component.
    pub fn each_task_input_port<'a>(
        &'a self,
        registry: &'a dyn ModelRegistry,
    ) -> Result<impl Iterator<Item = Result<&'a Port>> + 'a> {
        let mapping = self.named_port_mappings_for(registry, self.model)?;
        Ok(registry
            .input_ports(self.model)
            .into_iter()
            .map(move |port| self.project(registry, mapping, port)))
    }

    /// Component output ports backing the logical output ports
    pub fn each_task_output_port<'a>(
        &'a self,
        registry: &'a dyn ModelRegistry,
    ) -> Result<impl Iterator<Item = Result<&'a Port>> + 'a> {
        let mapping = self.named_port_mappings_for(registry, self.model)?;
        Ok(registry
            .output_ports(self.model)
            .into_iter()
            .map(move |port| self.project(registry, mapping, port)))
    }

    /// Component port backing the logical port `name`
    pub fn task_port<'r>(&self, registry: &'r dyn ModelRegistry, name: &str) -> Result<&'r Port> {
        let accessor = self.accessor(registry, name)?;
        self.component_port(registry, self.component_model, accessor)
    }

    fn accessor(&self, registry: &dyn ModelRegistry, name: &str) -> Result<&PortAccessor> {
        self.port_accessors
            .get(name)
            .ok_or_else(|| Error::missing_mapping(format!("port {name}"), self.described(registry)))
    }

    fn component_port<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        component: ModelId,
        accessor: &PortAccessor,
    ) -> Result<&'r Port> {
        let port = match accessor.direction {
            PortDirection::Input => registry.find_input_port(component, &accessor.task_port),
            PortDirection::Output => registry.find_output_port(component, &accessor.task_port),
        };
        port.ok_or_else(|| {
            Error::not_found(format!(
                "{} port {} on {component}",
                accessor.direction, accessor.task_port
            ))
        })
    }

    fn project<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        mapping: &PortMapping,
        port: &Port,
    ) -> Result<&'r Port> {
        let task_port = mapping.get(&port.name).ok_or_else(|| {
            Error::missing_mapping(format!("port {}", port.name), self.described(registry))
        })?;
        let accessor = PortAccessor {
            direction: port.direction,
            task_port: task_port.to_string(),
        };
        self.component_port(registry, self.component_model, &accessor)
    }

    // ------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------

    /// This binding, as the only data service it stands for
    pub fn each_data_service(&self) -> std::iter::Once<&Self> {
        std::iter::once(self)
    }

    /// This binding if its model fulfills `service_model`
    pub fn find_all_services_from_type(
        &self,
        registry: &dyn ModelRegistry,
        service_model: ModelId,
    ) -> Vec<&Self> {
        if registry.fullfills(self.model, &[service_model]) {
            vec![self]
        } else {
            Vec::new()
        }
    }

    /// Slaves of this service on its component, as `(name, service)` pairs
    pub fn each_slave<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
    ) -> impl Iterator<Item = (&'r str, &'r BoundDataService)> {
        registry
            .each_slave_data_service(self.component_model, &self.full_name)
            .into_iter()
            .map(|slave| (slave.name(), slave))
    }

    /// Slave called `name`
    pub fn slave<'r>(
        &self,
        registry: &'r dyn ModelRegistry,
        name: &str,
    ) -> Option<&'r BoundDataService> {
        self.each_slave(registry)
            .find(|(slave_name, _)| *slave_name == name)
            .map(|(_, slave)| slave)
    }

    /// Declare slaves of this service on its component
    ///
    /// Every service declared through the builder is registered as a slave
    /// of this binding.
    pub fn add_slaves<F>(&self, registry: &mut dyn ModelRegistry, declare: F) -> Result<&Self>
    where
        F: FnOnce(&mut SlaveDefinitionBuilder<'_>) -> Result<()>,
    {
        let mut builder =
            SlaveDefinitionBuilder::new(registry, self.component_model, self.full_name.clone());
        declare(&mut builder)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// Attach this service to a task instance
    ///
    /// The task's model must fulfill the component model of the binding.
    pub fn bind<T: TaskInstance>(
        &self,
        registry: &dyn ModelRegistry,
        task: T,
    ) -> Result<TaskServiceBinding<T>> {
        if !registry.fullfills(task.model(), &[self.component_model]) {
            let component = registry
                .name(self.component_model)
                .map(str::to_string)
                .unwrap_or_else(|_| self.component_model.to_string());
            return Err(Error::incompatible(
                self.full_name.clone(),
                task.name(),
                component,
            ));
        }
        Ok(TaskServiceBinding {
            task,
            service: self.clone(),
        })
    }
}

impl PartialEq for BoundDataService {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name && self.component_model == other.component_model
    }
}

impl Eq for BoundDataService {}

impl fmt::Display for BoundDataService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SERVICE_SHORT_NAME_SEPARATOR}{}", self.component_model, self.full_name)
    }
}

/// A bound service attached to a task instance
#[derive(Debug, Clone)]
pub struct TaskServiceBinding<T> {
    task: T,
    service: BoundDataService,
}

impl<T: TaskInstance> TaskServiceBinding<T> {
    /// The task instance
    pub fn task(&self) -> &T {
        &self.task
    }

    /// The bound service
    pub fn service(&self) -> &BoundDataService {
        &self.service
    }

    /// Task port backing the logical port `name`
    pub fn task_port<'r>(&self, registry: &'r dyn ModelRegistry, name: &str) -> Result<&'r Port> {
        let accessor = self.service.accessor(registry, name)?;
        self.service
            .component_port(registry, self.task.model(), accessor)
    }

    /// Split into task and service
    pub fn into_parts(self) -> (T, BoundDataService) {
        (self.task, self.service)
    }
}
