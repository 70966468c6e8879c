//! Definition resolution interface

use rcb_domain::entities::InstanceRequirements;
use rcb_domain::error::Result;
use rcb_domain::value_objects::ProfileId;

/// Resolution of profile definitions
///
/// This is the entry point of the instantiation engine: it asks for a
/// definition by name and gets back requirements carrying the complete DI
/// context stack of the profile.
pub trait DefinitionResolverInterface {
    /// The stored requirement for `name`, without DI context
    fn definition(&self, profile: ProfileId, name: &str) -> Result<&InstanceRequirements>;

    /// A copy of the requirement for `name` with the profile's DI context
    fn resolved_definition(&self, profile: ProfileId, name: &str) -> Result<InstanceRequirements>;

    /// Push the DI layers of `profile` onto the context of `requirements`
    fn inject_di_context(
        &self,
        profile: ProfileId,
        requirements: &mut InstanceRequirements,
    ) -> Result<()>;
}
