//! Slave service declarations
//!
//! ```ignore
//! image.add_slaves(&mut registry, |slaves| {
//!     slaves.provides(zoom, "zoom")?;
//!     slaves.provides_with(pan, ProvideOptions::new("pan").with_port_mapping("cmd", "pan_cmd"))?;
//!     Ok(())
//! })?;
//! ```

use crate::entities::bound_data_service::BoundDataService;
use crate::error::Result;
use crate::ports::ModelRegistry;
use crate::value_objects::{ModelId, ProvideOptions};

/// Scoped builder registering slaves of one master service
pub struct SlaveDefinitionBuilder<'a> {
    registry: &'a mut dyn ModelRegistry,
    component_model: ModelId,
    master: String,
    declared: Vec<String>,
}

impl<'a> SlaveDefinitionBuilder<'a> {
    /// Builder declaring slaves of `master` on `component_model`
    pub fn new(
        registry: &'a mut dyn ModelRegistry,
        component_model: ModelId,
        master: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            component_model,
            master: master.into(),
            declared: Vec::new(),
        }
    }

    /// Full name of the master service
    pub fn master(&self) -> &str {
        &self.master
    }

    /// Component model the slaves are declared on
    pub fn component_model(&self) -> ModelId {
        self.component_model
    }

    /// Full names of the slaves declared so far
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Declare that the component provides `service_model` as slave `name`
    pub fn provides(&mut self, service_model: ModelId, name: &str) -> Result<BoundDataService> {
        self.provides_with(service_model, ProvideOptions::new(name))
    }

    /// Declare a slave with explicit options
    ///
    /// `slave_of` is always overwritten with the master of this builder.
    pub fn provides_with(
        &mut self,
        service_model: ModelId,
        options: ProvideOptions,
    ) -> Result<BoundDataService> {
        let options = options.slave_of(self.master.clone());
        let service = self
            .registry
            .provides(self.component_model, service_model, options)?;
        self.declared.push(service.full_name().to_string());
        Ok(service)
    }
}
