//! Profile entity
//!
//! A profile is a named set of dependency injections and of pre-defined
//! instance requirements ("definitions"). Profiles compose: a profile can use
//! other profiles, inheriting their definitions, their robot devices and,
//! at resolution time, their DI layers. Composition itself is carried out by
//! the profile resolver, which owns all profiles; this type only holds the
//! per-profile state.

use crate::entities::dependency_injection::{DependencyInjection, Placeholder, Selection};
use crate::entities::instance_requirements::{InstanceRequirements, IntoInstanceRequirements};
use crate::entities::robot::RobotDefinition;
use crate::error::{Error, Result};
use crate::value_objects::ProfileId;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// A set of DI rules and named definitions
///
/// Cloning a profile deep-copies its definitions, so the copy can be mutated
/// without affecting the original. Used profiles are references and stay
/// shared; the DI layer is shared until one side adds rules to it.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    definitions: BTreeMap<String, InstanceRequirements>,
    used_profiles: Vec<ProfileId>,
    dependency_injection: Arc<DependencyInjection>,
    robot: RobotDefinition,
}

impl Profile {
    /// Create an empty profile
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definitions: BTreeMap::new(),
            used_profiles: Vec::new(),
            dependency_injection: Arc::new(DependencyInjection::new()),
            robot: RobotDefinition::new(),
        }
    }

    /// Profile name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the profile (used when duplicating)
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Definitions, including the ones inherited from used profiles
    pub fn definitions(&self) -> &BTreeMap<String, InstanceRequirements> {
        &self.definitions
    }

    /// Profiles used by this one, in declaration order
    pub fn used_profiles(&self) -> &[ProfileId] {
        &self.used_profiles
    }

    /// The DI layer defined by this profile
    pub fn dependency_injection(&self) -> &DependencyInjection {
        &self.dependency_injection
    }

    /// Whether this profile and `other` currently share the same DI layer
    pub fn shares_dependency_injection(&self, other: &Profile) -> bool {
        Arc::ptr_eq(&self.dependency_injection, &other.dependency_injection)
    }

    /// Robot devices, including the ones inherited from used profiles
    pub fn robot(&self) -> &RobotDefinition {
        &self.robot
    }

    /// Mutable access to the robot devices
    pub fn robot_mut(&mut self) -> &mut RobotDefinition {
        &mut self.robot
    }

    /// Add dependency injection rules for the definitions of this profile
    pub fn use_rules<I>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (Placeholder, Selection)>,
    {
        Arc::make_mut(&mut self.dependency_injection).extend(rules);
        self
    }

    /// Add a single dependency injection rule
    pub fn use_rule(
        &mut self,
        placeholder: impl Into<Placeholder>,
        selection: impl Into<Selection>,
    ) -> &mut Self {
        Arc::make_mut(&mut self.dependency_injection).add(placeholder, selection);
        self
    }

    /// Give a name to a requirement, replacing any previous definition
    ///
    /// The profile stores its own copy of the requirement.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        requirements: impl IntoInstanceRequirements,
    ) -> &InstanceRequirements {
        let requirements = requirements.into_instance_requirements();
        match self.definitions.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(requirements);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(requirements),
        }
    }

    /// The stored (unresolved) requirement for `name`
    pub fn definition(&self, name: &str) -> Result<&InstanceRequirements> {
        self.definitions
            .get(name)
            .ok_or_else(|| Error::missing_definition(&self.name, name))
    }

    /// Record the use of another profile
    ///
    /// `definitions` and `robot` are the used profile's. Definitions already
    /// present here (local or inherited earlier) win over the incoming ones.
    /// The robot merge is checked before anything is modified.
    pub fn absorb(
        &mut self,
        used: ProfileId,
        definitions: &BTreeMap<String, InstanceRequirements>,
        robot: &RobotDefinition,
    ) -> Result<()> {
        self.robot.use_robot(robot)?;
        self.used_profiles.push(used);
        for (name, requirements) in definitions {
            self.definitions
                .entry(name.clone())
                .or_insert_with(|| requirements.clone());
        }
        Ok(())
    }

    /// Clear this profile of all data, leaving it blank
    ///
    /// Used when models are reloaded and no stale state may survive.
    pub fn clear_model(&mut self) {
        self.robot = RobotDefinition::new();
        self.definitions.clear();
        self.dependency_injection = Arc::new(DependencyInjection::new());
        self.used_profiles.clear();
    }
}
