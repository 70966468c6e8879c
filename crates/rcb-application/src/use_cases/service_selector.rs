//! Service Selector Use Case
//!
//! Given a component model and an abstract service model, find the bound
//! service answering the request. When the component has no such service
//! but one of its master services can offer it as a dynamic slave, the
//! slave is materialized on a private specialization of the component.

use crate::domain_services::selection::{SelectedService, ServiceSelectorInterface};
use rcb_domain::entities::BoundDataService;
use rcb_domain::error::{Error, Result};
use rcb_domain::ports::ModelRegistry;
use rcb_domain::value_objects::ModelId;
use tracing::debug;

/// Service selection over a model registry
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceSelector;

impl ServiceSelector {
    /// Create a selector
    pub fn new() -> Self {
        Self
    }

    fn pick(
        registry: &dyn ModelRegistry,
        component: ModelId,
        service_model: ModelId,
        name_hint: Option<&str>,
        candidates: Vec<&BoundDataService>,
    ) -> Result<BoundDataService> {
        if let [single] = candidates.as_slice() {
            return Ok((*single).clone());
        }
        if let Some(hint) = name_hint {
            if let Some(found) = candidates
                .iter()
                .find(|srv| srv.full_name() == hint || srv.name() == hint)
            {
                return Ok((*found).clone());
            }
        }
        Err(Error::ambiguous_service(
            registry.name(component)?,
            registry.name(service_model)?,
            candidates
                .iter()
                .map(|srv| srv.full_name().to_string())
                .collect(),
        ))
    }
}

impl ServiceSelectorInterface for ServiceSelector {
    fn select(
        &self,
        registry: &mut dyn ModelRegistry,
        component: ModelId,
        service_model: ModelId,
        name_hint: Option<&str>,
        reason: &str,
    ) -> Result<SelectedService> {
        let candidates = registry.find_all_services_from_type(component, service_model);
        if !candidates.is_empty() {
            let service = Self::pick(&*registry, component, service_model, name_hint, candidates)?;
            return Ok(SelectedService {
                component,
                service: service.as_service(&*registry, service_model),
                dynamic: false,
            });
        }

        let slave_name = match name_hint {
            Some(hint) => hint.to_string(),
            None => registry.model(service_model)?.short_name().to_string(),
        };
        let masters: Vec<BoundDataService> = registry
            .each_data_service(component)
            .into_iter()
            .filter(|srv| srv.is_master())
            .cloned()
            .collect();
        for master in &masters {
            if let Some((specialized, slave)) = master.require_dynamic_slave(
                registry,
                service_model,
                &slave_name,
                reason,
                Some(component),
            )? {
                debug!(
                    master = %master.full_name(),
                    slave = %slave.full_name(),
                    "selected dynamic slave"
                );
                return Ok(SelectedService {
                    component: specialized,
                    service: slave.as_service(&*registry, service_model),
                    dynamic: true,
                });
            }
        }

        Err(Error::not_found(format!(
            "service {} on {}",
            registry.name(service_model)?,
            registry.name(component)?
        )))
    }
}
