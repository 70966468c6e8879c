//! Service selection interface

use rcb_domain::entities::BoundDataService;
use rcb_domain::error::Result;
use rcb_domain::ports::ModelRegistry;
use rcb_domain::value_objects::ModelId;

/// Outcome of a service selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedService {
    /// Component model the service lives on; a private specialization of the
    /// requested component when a dynamic slave had to be created
    pub component: ModelId,
    /// The selected service, presented as the requested service model
    pub service: BoundDataService,
    /// Whether a dynamic slave was materialized for this selection
    pub dynamic: bool,
}

/// Selection of the bound service of a component answering a request
pub trait ServiceSelectorInterface {
    /// Select the service of `component` fulfilling `service_model`
    ///
    /// `name_hint` disambiguates between several matching services and
    /// names the slave when one has to be created; `reason` tags the private
    /// specialization created in that case.
    fn select(
        &self,
        registry: &mut dyn ModelRegistry,
        component: ModelId,
        service_model: ModelId,
        name_hint: Option<&str>,
        reason: &str,
    ) -> Result<SelectedService>;
}
