//! Profile Resolver Use Case
//!
//! Owns every profile and carries out the operations that involve more than
//! one of them: composition, DI context assembly and duplication.
//!
//! ## Override policy
//!
//! | Concern | Winner |
//! |---------|--------|
//! | Definition defined locally and in a used profile | local definition |
//! | Definition in two used profiles | the profile used first |
//! | DI rule in the profile and in a used profile | the profile itself |
//! | DI rule in two used profiles | the profile used last |
//! | DI rule in a used profile and a robot device | the used profile |

use crate::domain_services::profiles::DefinitionResolverInterface;
use rcb_domain::constants::DEFAULT_MAX_SELECTION_DEPTH;
use rcb_domain::entities::{
    InstanceRequirements, IntoInstanceRequirements, Placeholder, Profile, Selection,
};
use rcb_domain::error::{Error, Result};
use rcb_domain::value_objects::ProfileId;
use tracing::debug;

/// Arena of profiles addressed by [`ProfileId`]
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    profiles: Vec<Profile>,
    max_selection_depth: usize,
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::with_max_selection_depth(DEFAULT_MAX_SELECTION_DEPTH)
    }

    /// Create an empty resolver bounding role alias chains to `depth`
    pub fn with_max_selection_depth(depth: usize) -> Self {
        Self {
            profiles: Vec::new(),
            max_selection_depth: depth,
        }
    }

    /// Bound on role alias chains followed by [`resolve_selection`](Self::resolve_selection)
    pub fn max_selection_depth(&self) -> usize {
        self.max_selection_depth
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile was created
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Create an empty profile called `name`
    pub fn create_profile(&mut self, name: &str) -> Result<ProfileId> {
        if name.is_empty() {
            return Err(Error::invalid_argument("profile names cannot be empty"));
        }
        if self.find_by_name(name).is_some() {
            return Err(Error::invalid_argument(format!(
                "a profile called {name} already exists"
            )));
        }
        Ok(self.push(Profile::new(name)))
    }

    fn push(&mut self, profile: Profile) -> ProfileId {
        let id = ProfileId::new(self.profiles.len());
        debug!(profile = %profile.name(), %id, "created profile");
        self.profiles.push(profile);
        id
    }

    /// Profile called `name`
    pub fn find_by_name(&self, name: &str) -> Option<ProfileId> {
        self.profiles
            .iter()
            .position(|p| p.name() == name)
            .map(ProfileId::new)
    }

    /// The profile registered under `id`
    pub fn profile(&self, id: ProfileId) -> Result<&Profile> {
        self.profiles
            .get(id.index())
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    /// Mutable access to the profile registered under `id`
    pub fn profile_mut(&mut self, id: ProfileId) -> Result<&mut Profile> {
        self.profiles
            .get_mut(id.index())
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    /// Add DI rules to `profile`
    pub fn use_rules<I>(&mut self, profile: ProfileId, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = (Placeholder, Selection)>,
    {
        self.profile_mut(profile)?.use_rules(rules);
        Ok(())
    }

    /// Give a name to a requirement in `profile`
    pub fn define(
        &mut self,
        profile: ProfileId,
        name: &str,
        requirements: impl IntoInstanceRequirements,
    ) -> Result<&InstanceRequirements> {
        Ok(self.profile_mut(profile)?.define(name, requirements))
    }

    /// Make `profile` use `used`
    ///
    /// `profile` inherits the definitions of `used` it does not already have
    /// and the devices of its robot. A profile cannot use itself, directly
    /// or through the profiles it uses; a robot device conflict is reported
    /// before anything changes.
    pub fn use_profile(&mut self, profile: ProfileId, used: ProfileId) -> Result<()> {
        let (definitions, robot) = {
            let used_profile = self.profile(used)?;
            (used_profile.definitions().clone(), used_profile.robot().clone())
        };
        if profile == used || self.uses(used, profile)? {
            return Err(Error::invalid_argument(format!(
                "{} cannot use {}: profiles would use each other",
                self.profile(profile)?.name(),
                self.profile(used)?.name()
            )));
        }
        self.profile_mut(profile)?.absorb(used, &definitions, &robot)?;
        debug!(%profile, %used, "profile composition");
        Ok(())
    }

    /// Whether `profile` uses `target`, directly or transitively
    pub fn uses(&self, profile: ProfileId, target: ProfileId) -> Result<bool> {
        let mut stack = vec![profile];
        let mut seen = Vec::new();
        while let Some(current) = stack.pop() {
            if seen.contains(&current) {
                continue;
            }
            seen.push(current);
            for &next in self.profile(current)?.used_profiles() {
                if next == target {
                    return Ok(true);
                }
                stack.push(next);
            }
        }
        Ok(false)
    }

    /// Copy `profile` under `name`
    ///
    /// Definitions are deep-copied. Used profiles stay shared, and so does
    /// the DI layer until either profile adds rules to it.
    pub fn duplicate(&mut self, profile: ProfileId, name: &str) -> Result<ProfileId> {
        if self.find_by_name(name).is_some() {
            return Err(Error::invalid_argument(format!(
                "a profile called {name} already exists"
            )));
        }
        let mut copy = self.profile(profile)?.clone();
        copy.set_name(name);
        Ok(self.push(copy))
    }

    /// Clear `profile` of all data, leaving it blank
    pub fn clear_model(&mut self, profile: ProfileId) -> Result<()> {
        self.profile_mut(profile)?.clear_model();
        Ok(())
    }

    /// Resolve `placeholder` for the definition `name` of `profile`
    ///
    /// Local selections of the definition come first, then the DI context
    /// of the profile, following role aliases.
    pub fn resolve_selection(
        &self,
        profile: ProfileId,
        name: &str,
        placeholder: &Placeholder,
    ) -> Result<Selection> {
        let requirements = self.resolved_definition(profile, name)?;
        if let Some(selection) = requirements.selections().get(placeholder) {
            return Ok(selection.clone());
        }
        requirements
            .dependency_injection_context()
            .resolve_transitive(placeholder, self.max_selection_depth)
            .cloned()
    }
}

impl DefinitionResolverInterface for ProfileResolver {
    fn definition(&self, profile: ProfileId, name: &str) -> Result<&InstanceRequirements> {
        self.profile(profile)?.definition(name)
    }

    fn resolved_definition(&self, profile: ProfileId, name: &str) -> Result<InstanceRequirements> {
        let mut requirements = self.definition(profile, name)?.clone();
        self.inject_di_context(profile, &mut requirements)?;
        Ok(requirements)
    }

    fn inject_di_context(
        &self,
        profile: ProfileId,
        requirements: &mut InstanceRequirements,
    ) -> Result<()> {
        let current = self.profile(profile)?;
        requirements
            .dependency_injection_context_mut()
            .push(current.robot().to_dependency_injection());
        for &used in current.used_profiles() {
            self.inject_di_context(used, requirements)?;
        }
        requirements
            .dependency_injection_context_mut()
            .push(current.dependency_injection().clone());
        Ok(())
    }
}
