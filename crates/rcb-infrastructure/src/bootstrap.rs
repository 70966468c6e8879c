//! Resolution environment bootstrap
//!
//! Composition root: turns an [`AppConfig`] into the model registry, the
//! profile resolver and the service selector, configured consistently.
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let mut env = init_environment(config)?;
//!
//! let cam = env.registry_mut().component_model("Cam")?;
//! let profile = env.profiles_mut().create_profile("robot")?;
//! ```

use crate::config::loader::validate_app_config;
use crate::config::AppConfig;
use rcb_application::{
    DefinitionResolverInterface, ProfileResolver, SelectedService, ServiceSelector,
    ServiceSelectorInterface,
};
use rcb_domain::entities::InstanceRequirements;
use rcb_domain::error::Result;
use rcb_domain::value_objects::{ModelId, ProfileId};
use rcb_providers::InMemoryModelRegistry;
use tracing::info;

/// Everything needed to declare models and resolve requirements
#[derive(Debug, Clone)]
pub struct ResolutionEnvironment {
    config: AppConfig,
    registry: InMemoryModelRegistry,
    profiles: ProfileResolver,
    selector: ServiceSelector,
}

/// Build a resolution environment from a validated configuration
pub fn init_environment(config: AppConfig) -> Result<ResolutionEnvironment> {
    validate_app_config(&config)?;

    let registry = InMemoryModelRegistry::with_options(config.resolution.registry_options());
    let profiles = ProfileResolver::with_max_selection_depth(config.resolution.max_selection_depth);

    info!(
        registry = registry.provider_name(),
        strict_port_types = config.resolution.strict_port_types,
        allow_dynamic_ports = config.resolution.allow_dynamic_ports,
        max_selection_depth = config.resolution.max_selection_depth,
        "resolution environment ready"
    );

    Ok(ResolutionEnvironment {
        config,
        registry,
        profiles,
        selector: ServiceSelector::new(),
    })
}

impl ResolutionEnvironment {
    /// Configuration the environment was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Model registry
    pub fn registry(&self) -> &InMemoryModelRegistry {
        &self.registry
    }

    /// Mutable model registry, for declaring models and services
    pub fn registry_mut(&mut self) -> &mut InMemoryModelRegistry {
        &mut self.registry
    }

    /// Profile resolver
    pub fn profiles(&self) -> &ProfileResolver {
        &self.profiles
    }

    /// Mutable profile resolver, for declaring profiles
    pub fn profiles_mut(&mut self) -> &mut ProfileResolver {
        &mut self.profiles
    }

    /// Definition `name` of `profile` with its DI context
    pub fn resolved_definition(&self, profile: ProfileId, name: &str) -> Result<InstanceRequirements> {
        self.profiles.resolved_definition(profile, name)
    }

    /// Service of `component` answering `service_model`
    ///
    /// May create a private specialization of `component` in the registry
    /// when the service has to be offered as a dynamic slave.
    pub fn select_service(
        &mut self,
        component: ModelId,
        service_model: ModelId,
        name_hint: Option<&str>,
        reason: &str,
    ) -> Result<SelectedService> {
        self.selector
            .select(&mut self.registry, component, service_model, name_hint, reason)
    }
}
