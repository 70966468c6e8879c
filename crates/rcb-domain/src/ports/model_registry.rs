//! Model registry port
//!
//! The resolution rules never own models. Component and data service models,
//! their ports and their bound services live in a registry implementing
//! [`ModelRegistry`]; bindings and profiles address them through
//! [`ModelId`] handles.
//!
//! ## Contract
//!
//! | Operation | Meaning |
//! |-----------|---------|
//! | `fullfills` | structural fulfillment: self, supermodel chain, provided/included services |
//! | `new_submodel` | fresh model inheriting the parent's ports |
//! | `specialize` | private specialization of a component model |
//! | `provides` | declare a bound service on a component model |
//! | `require_dynamic_service` | declare a bound service, creating missing ports if allowed |

use crate::entities::{BoundDataService, Model, ModelKind};
use crate::error::{Error, Result};
use crate::value_objects::{ModelId, Port, ProvideOptions};

/// Storage and structural queries over component and data service models
pub trait ModelRegistry {
    /// The model registered under `id`
    fn model(&self, id: ModelId) -> Result<&Model>;

    /// Mutable access to the model registered under `id`
    fn model_mut(&mut self, id: ModelId) -> Result<&mut Model>;

    /// Create a submodel of `parent`, inheriting its ports
    fn new_submodel(&mut self, parent: ModelId, name: &str) -> Result<ModelId>;

    /// Create a private specialization of the component model `component`
    ///
    /// The specialization inherits the bound services of `component`.
    fn specialize(&mut self, component: ModelId, name: &str) -> Result<ModelId>;

    /// Declare that `component` provides `service_model`
    fn provides(
        &mut self,
        component: ModelId,
        service_model: ModelId,
        options: ProvideOptions,
    ) -> Result<BoundDataService>;

    /// Like [`provides`](Self::provides), creating missing component ports
    /// when the registry allows it
    fn require_dynamic_service(
        &mut self,
        component: ModelId,
        service_model: ModelId,
        options: ProvideOptions,
    ) -> Result<BoundDataService>;

    /// Bound services of `component`, masters and slaves, in declaration order
    fn each_data_service(&self, component: ModelId) -> Vec<&BoundDataService>;

    /// Mutable access to the bound service called `full_name` on `component`
    fn data_service_mut(
        &mut self,
        component: ModelId,
        full_name: &str,
    ) -> Option<&mut BoundDataService>;

    /// Record the current state so that later changes can be undone
    ///
    /// Savepoints nest. Each one is closed by either
    /// [`release_savepoint`](Self::release_savepoint) or
    /// [`rollback_to_savepoint`](Self::rollback_to_savepoint).
    fn savepoint(&mut self);

    /// Close the latest savepoint, keeping the changes made since
    fn release_savepoint(&mut self);

    /// Close the latest savepoint, undoing every change made since
    fn rollback_to_savepoint(&mut self);

    /// Model name
    fn name(&self, id: ModelId) -> Result<&str> {
        self.model(id).map(Model::name)
    }

    /// Component or data service
    fn kind(&self, id: ModelId) -> Result<ModelKind> {
        self.model(id).map(Model::kind)
    }

    /// Direct parent of `id`
    fn supermodel(&self, id: ModelId) -> Option<ModelId> {
        self.model(id).ok().and_then(Model::supermodel)
    }

    /// Whether `model` structurally fulfills every model of `targets`
    ///
    /// A model fulfills itself, each model of its supermodel chain, and
    /// (transitively) every service model it provides or includes.
    fn fullfills(&self, model: ModelId, targets: &[ModelId]) -> bool {
        let fullfilled = self.fullfilled_models(model);
        targets.iter().all(|target| fullfilled.contains(target))
    }

    /// Every model `model` fulfills, `model` first
    fn fullfilled_models(&self, model: ModelId) -> Vec<ModelId> {
        let mut result = Vec::new();
        let mut queue = vec![model];
        while let Some(current) = queue.pop() {
            if result.contains(&current) {
                continue;
            }
            result.push(current);
            if let Ok(m) = self.model(current) {
                queue.extend(m.provided().iter().rev().copied());
                if let Some(parent) = m.supermodel() {
                    queue.push(parent);
                }
            }
        }
        result
    }

    /// Whether `id` is a specialization private to one task instance
    fn is_private_specialization(&self, id: ModelId) -> bool {
        self.model(id)
            .map(Model::is_private_specialization)
            .unwrap_or(false)
    }

    /// Input ports of `model`, in declaration order
    fn input_ports(&self, model: ModelId) -> Vec<&Port> {
        self.model(model)
            .map(|m| m.input_ports().collect())
            .unwrap_or_default()
    }

    /// Output ports of `model`, in declaration order
    fn output_ports(&self, model: ModelId) -> Vec<&Port> {
        self.model(model)
            .map(|m| m.output_ports().collect())
            .unwrap_or_default()
    }

    /// Input port `name` of `model`
    fn find_input_port(&self, model: ModelId, name: &str) -> Option<&Port> {
        self.model(model).ok()?.find_input_port(name)
    }

    /// Output port `name` of `model`
    fn find_output_port(&self, model: ModelId, name: &str) -> Option<&Port> {
        self.model(model).ok()?.find_output_port(name)
    }

    /// Declare a new port on `model`
    fn add_port(&mut self, model: ModelId, port: Port) -> Result<()> {
        self.model_mut(model)?.add_port(port)
    }

    /// Declare a new input port on `model`
    fn add_input_port(&mut self, model: ModelId, name: &str, type_name: &str) -> Result<()> {
        self.add_port(model, Port::input(name, type_name))
    }

    /// Declare a new output port on `model`
    fn add_output_port(&mut self, model: ModelId, name: &str, type_name: &str) -> Result<()> {
        self.add_port(model, Port::output(name, type_name))
    }

    /// Rename a port of `model`
    fn rename_port(&mut self, model: ModelId, old: &str, new: &str) -> Result<()> {
        self.model_mut(model)?.rename_port(old, new)
    }

    /// Change the type of a port of `model`
    fn set_port_type(&mut self, model: ModelId, port: &str, type_name: &str) -> Result<()> {
        self.model_mut(model)?.set_port_type(port, type_name)
    }

    /// The bound service called `full_name` on `component`
    fn find_data_service(&self, component: ModelId, full_name: &str) -> Option<&BoundDataService> {
        self.each_data_service(component)
            .into_iter()
            .find(|srv| srv.full_name() == full_name)
    }

    /// The bound service called `full_name` on `component`, or an error
    fn data_service(&self, component: ModelId, full_name: &str) -> Result<&BoundDataService> {
        self.find_data_service(component, full_name).ok_or_else(|| {
            let component = self.name(component).unwrap_or("<unknown>").to_string();
            Error::not_found(format!("service {full_name} on {component}"))
        })
    }

    /// Slaves of the master service `master_full_name` on `component`
    fn each_slave_data_service(
        &self,
        component: ModelId,
        master_full_name: &str,
    ) -> Vec<&BoundDataService> {
        self.each_data_service(component)
            .into_iter()
            .filter(|srv| srv.master() == Some(master_full_name))
            .collect()
    }

    /// Bound services of `component` whose model fulfills `service_model`
    fn find_all_services_from_type(
        &self,
        component: ModelId,
        service_model: ModelId,
    ) -> Vec<&BoundDataService> {
        self.each_data_service(component)
            .into_iter()
            .filter(|srv| self.fullfills(srv.model(), &[service_model]))
            .collect()
    }
}
