//! Instance requirements
//!
//! The value a profile stores under a definition name and hands over to the
//! instantiation engine once the DI context has been attached.

use crate::entities::bound_data_service::BoundDataService;
use crate::entities::dependency_injection::{
    DependencyInjection, DependencyInjectionContext, Placeholder, Selection,
};
use crate::value_objects::ModelId;
use serde_json::{Map, Value};

/// Requirements on a task to be instantiated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceRequirements {
    models: Vec<ModelId>,
    service: Option<String>,
    arguments: Map<String, Value>,
    selections: DependencyInjection,
    dependency_injection_context: DependencyInjectionContext,
}

impl InstanceRequirements {
    /// Requirements on something fulfilling all of `models`
    pub fn new(models: impl IntoIterator<Item = ModelId>) -> Self {
        Self {
            models: models.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Models the instance must fulfill
    pub fn models(&self) -> &[ModelId] {
        &self.models
    }

    /// Full name of the selected bound service, if the requirement targets one
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Restrict the requirement to one bound service of the component
    pub fn with_service(mut self, full_name: impl Into<String>) -> Self {
        self.service = Some(full_name.into());
        self
    }

    /// Set a task argument
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Task arguments
    pub fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }

    /// Add a selection local to this requirement
    pub fn use_selection(
        &mut self,
        placeholder: impl Into<Placeholder>,
        selection: impl Into<Selection>,
    ) -> &mut Self {
        self.selections.add(placeholder, selection);
        self
    }

    /// Selections local to this requirement
    pub fn selections(&self) -> &DependencyInjection {
        &self.selections
    }

    /// DI context stack attached by profile resolution
    pub fn dependency_injection_context(&self) -> &DependencyInjectionContext {
        &self.dependency_injection_context
    }

    /// Mutable DI context stack, for profiles to push their layers
    pub fn dependency_injection_context_mut(&mut self) -> &mut DependencyInjectionContext {
        &mut self.dependency_injection_context
    }

    /// Selection for `placeholder`: local selections first, then the stack
    pub fn resolve_selection(&self, placeholder: &Placeholder) -> Option<&Selection> {
        self.selections
            .get(placeholder)
            .or_else(|| self.dependency_injection_context.resolve(placeholder))
    }
}

/// Conversion into the instance-requirement shape stored by profiles
pub trait IntoInstanceRequirements {
    /// Perform the conversion
    fn into_instance_requirements(self) -> InstanceRequirements;
}

impl IntoInstanceRequirements for InstanceRequirements {
    fn into_instance_requirements(self) -> InstanceRequirements {
        self
    }
}

impl IntoInstanceRequirements for &InstanceRequirements {
    fn into_instance_requirements(self) -> InstanceRequirements {
        self.clone()
    }
}

impl IntoInstanceRequirements for ModelId {
    fn into_instance_requirements(self) -> InstanceRequirements {
        InstanceRequirements::new([self])
    }
}

impl IntoInstanceRequirements for &BoundDataService {
    fn into_instance_requirements(self) -> InstanceRequirements {
        InstanceRequirements::new([self.component_model()]).with_service(self.full_name())
    }
}
