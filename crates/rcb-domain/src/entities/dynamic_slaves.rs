//! Dynamic slave specialization
//!
//! A master service can declare that it is able to offer slaves of a given
//! service model on demand. Nothing happens at declaration time; the cost of
//! creating models is only paid when a task instance actually asks for such
//! a slave through [`BoundDataService::require_dynamic_slave`].
//!
//! Materializing a slave never touches the shared component model: the
//! slave is registered on a private specialization of it, created on the fly
//! unless the caller already passes one.

use crate::constants::specialized_name;
use crate::entities::bound_data_service::BoundDataService;
use crate::error::Result;
use crate::ports::ModelRegistry;
use crate::value_objects::{DynamicSlaveOptions, ModelId, ProvideOptions};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

type SpecializationFn = dyn Fn(&mut ServiceSpecialization<'_, '_>) -> Result<()> + Send + Sync;

/// Customization applied to every service submodel created for a slave
#[derive(Clone)]
pub struct SpecializationBlock(Arc<SpecializationFn>);

impl SpecializationBlock {
    /// Wrap a customization closure
    pub fn new<F>(block: F) -> Self
    where
        F: Fn(&mut ServiceSpecialization<'_, '_>) -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(block))
    }

    fn apply(&self, specialization: &mut ServiceSpecialization<'_, '_>) -> Result<()> {
        (self.0)(specialization)
    }
}

impl fmt::Debug for SpecializationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpecializationBlock(..)")
    }
}

/// One `dynamic_slaves` declaration
#[derive(Debug, Clone)]
pub struct DynamicSlaveDeclaration {
    /// Service model the slaves are instances of
    pub required_model: ModelId,
    /// Customization applied to each slave's service submodel
    pub specialization: Option<SpecializationBlock>,
    /// Model the master presented when the declaration was made
    pub bound_model: ModelId,
    /// Options kept for the instantiation engine
    pub options: DynamicSlaveOptions,
}

/// Editing scope handed to a [`SpecializationBlock`]
///
/// Edits apply to the freshly created service submodel only.
pub struct ServiceSpecialization<'a, 'r> {
    registry: &'a mut (dyn ModelRegistry + 'r),
    model: ModelId,
    slave_name: &'a str,
}

impl<'a, 'r> ServiceSpecialization<'a, 'r> {
    /// Scope editing `model` for the slave `slave_name`
    pub fn new(
        registry: &'a mut (dyn ModelRegistry + 'r),
        model: ModelId,
        slave_name: &'a str,
    ) -> Self {
        Self {
            registry,
            model,
            slave_name,
        }
    }

    /// The service submodel being specialized
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Name the slave will be registered under
    pub fn slave_name(&self) -> &str {
        self.slave_name
    }

    /// Read access to the registry
    pub fn registry(&self) -> &dyn ModelRegistry {
        &*self.registry
    }

    /// Rename a port of the submodel
    pub fn rename_port(&mut self, old: &str, new: &str) -> Result<&mut Self> {
        self.registry.rename_port(self.model, old, new)?;
        Ok(self)
    }

    /// Change the data type of a port of the submodel
    pub fn set_port_type(&mut self, port: &str, type_name: &str) -> Result<&mut Self> {
        self.registry.set_port_type(self.model, port, type_name)?;
        Ok(self)
    }

    /// Add an input port to the submodel
    pub fn add_input_port(&mut self, name: &str, type_name: &str) -> Result<&mut Self> {
        self.registry.add_input_port(self.model, name, type_name)?;
        Ok(self)
    }

    /// Add an output port to the submodel
    pub fn add_output_port(&mut self, name: &str, type_name: &str) -> Result<&mut Self> {
        self.registry.add_output_port(self.model, name, type_name)?;
        Ok(self)
    }
}

impl BoundDataService {
    /// Declare that this service can offer slaves of `required_model` on demand
    ///
    /// Declaring the same required model again is allowed; the latest
    /// declaration is the one used.
    pub fn dynamic_slaves(
        &mut self,
        required_model: ModelId,
        options: DynamicSlaveOptions,
        specialization: Option<SpecializationBlock>,
    ) -> ModelId {
        let bound_model = self.model();
        if self
            .declared_dynamic_slaves()
            .iter()
            .any(|decl| decl.required_model == required_model)
        {
            warn!(
                service = %self.full_name(),
                required = %required_model,
                "dynamic slaves re-declared"
            );
        }
        self.declared_dynamic_slaves_mut().push(DynamicSlaveDeclaration {
            required_model,
            specialization,
            bound_model,
            options,
        });
        required_model
    }

    /// The dynamic slave declaration for `required_model`, if any
    pub fn find_dynamic_slave(&self, required_model: ModelId) -> Option<&DynamicSlaveDeclaration> {
        self.declared_dynamic_slaves()
            .iter()
            .rev()
            .find(|decl| decl.required_model == required_model)
    }

    /// Materialize a slave of `required_model` called `slave_name`
    ///
    /// Returns `Ok(None)` without touching the registry when no dynamic
    /// slave of `required_model` was declared. Otherwise returns the
    /// component model the slave lives on (a private specialization of
    /// `component_model`, defaulting to this binding's component) and the
    /// new slave binding.
    ///
    /// On error the registry is rolled back: neither the specialization nor
    /// the service submodel remain.
    pub fn require_dynamic_slave(
        &self,
        registry: &mut dyn ModelRegistry,
        required_model: ModelId,
        slave_name: &str,
        reason: &str,
        component_model: Option<ModelId>,
    ) -> Result<Option<(ModelId, BoundDataService)>> {
        let Some(declaration) = self.find_dynamic_slave(required_model) else {
            return Ok(None);
        };

        registry.savepoint();
        let component_model = component_model.unwrap_or(self.component_model());
        match self.materialize_slave(registry, declaration, slave_name, reason, component_model) {
            Ok(materialized) => {
                registry.release_savepoint();
                Ok(Some(materialized))
            }
            Err(err) => {
                registry.rollback_to_savepoint();
                debug!(
                    service = %self.full_name(),
                    slave = slave_name,
                    error = %err,
                    "dynamic slave materialization failed"
                );
                Err(err)
            }
        }
    }

    fn materialize_slave(
        &self,
        registry: &mut dyn ModelRegistry,
        declaration: &DynamicSlaveDeclaration,
        slave_name: &str,
        reason: &str,
        mut component_model: ModelId,
    ) -> Result<(ModelId, BoundDataService)> {
        if !registry.is_private_specialization(component_model) {
            let name = specialized_name(registry.name(component_model)?, reason);
            let specialized = registry.specialize(component_model, &name)?;
            debug!(
                model = %name,
                parent = %component_model,
                reason,
                "created private specialization"
            );
            component_model = specialized;
        }

        let service_name = format!(
            "{}.{}.{}",
            registry.name(component_model)?,
            self.name(),
            specialized_name(
                registry.model(declaration.required_model)?.short_name(),
                slave_name
            )
        );
        let service_model = registry.new_submodel(declaration.required_model, &service_name)?;

        if let Some(block) = &declaration.specialization {
            let mut specialization =
                ServiceSpecialization::new(&mut *registry, service_model, slave_name);
            block.apply(&mut specialization)?;
        }

        let options = ProvideOptions::new(slave_name).slave_of(self.full_name());
        let slave = registry.require_dynamic_service(component_model, service_model, options)?;
        debug!(
            slave = %slave.full_name(),
            model = %service_name,
            "materialized dynamic slave"
        );
        Ok((component_model, slave))
    }
}
