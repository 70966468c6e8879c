//! Dependency injection layers and context stacks
//!
//! A [`DependencyInjection`] layer maps abstract placeholders to concrete
//! selections. A [`DependencyInjectionContext`] stacks layers; lookups scan
//! from the most recently pushed layer backwards, so later layers override
//! earlier ones and earlier ones act as fallback defaults.
//!
//! ```
//! use rcb_domain::entities::{DependencyInjection, DependencyInjectionContext, Placeholder, Selection};
//!
//! let mut defaults = DependencyInjection::new();
//! defaults.add(Placeholder::role("camera"), Selection::instance("left_camera"));
//! let mut overrides = DependencyInjection::new();
//! overrides.add(Placeholder::role("camera"), Selection::instance("right_camera"));
//!
//! let mut context = DependencyInjectionContext::new();
//! context.push(defaults);
//! context.push(overrides);
//! assert_eq!(
//!     context.resolve(&Placeholder::role("camera")),
//!     Some(&Selection::instance("right_camera"))
//! );
//! ```

use crate::entities::instance_requirements::InstanceRequirements;
use crate::error::{Error, Result};
use crate::value_objects::ModelId;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Abstract slot a DI layer can fill
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// A service or component model to be replaced by something fulfilling it
    Model(ModelId),
    /// A named role (child name, device name, argument name)
    Role(String),
}

impl Placeholder {
    /// Placeholder for a named role
    pub fn role(name: impl Into<String>) -> Self {
        Self::Role(name.into())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(id) => write!(f, "{id}"),
            Self::Role(name) => write!(f, "role '{name}'"),
        }
    }
}

impl From<ModelId> for Placeholder {
    fn from(id: ModelId) -> Self {
        Self::Model(id)
    }
}

/// Concrete choice for a placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A concrete model
    Model(ModelId),
    /// A device of the robot, driven by `driver`
    Device {
        /// Device (physical role) name
        name: String,
        /// Driver model of the device
        driver: ModelId,
    },
    /// Alias to another role, resolved through the same stack
    Role(String),
    /// An already existing instance, by name
    Instance(String),
    /// A nested instance requirement
    Requirements(Box<InstanceRequirements>),
}

impl Selection {
    /// Select an existing instance by name
    pub fn instance(name: impl Into<String>) -> Self {
        Self::Instance(name.into())
    }

    /// Alias to another role
    pub fn role(name: impl Into<String>) -> Self {
        Self::Role(name.into())
    }

    /// Select a nested requirement
    pub fn requirements(requirements: InstanceRequirements) -> Self {
        Self::Requirements(Box::new(requirements))
    }
}

impl From<ModelId> for Selection {
    fn from(id: ModelId) -> Self {
        Self::Model(id)
    }
}

impl From<InstanceRequirements> for Selection {
    fn from(requirements: InstanceRequirements) -> Self {
        Self::requirements(requirements)
    }
}

/// One DI layer: placeholder to selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyInjection {
    rules: BTreeMap<Placeholder, Selection>,
}

impl DependencyInjection {
    /// Create an empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the selection for `placeholder`
    pub fn add(
        &mut self,
        placeholder: impl Into<Placeholder>,
        selection: impl Into<Selection>,
    ) -> &mut Self {
        self.rules.insert(placeholder.into(), selection.into());
        self
    }

    /// Add all given rules; later rules replace earlier ones
    pub fn extend<I>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (Placeholder, Selection)>,
    {
        self.rules.extend(rules);
        self
    }

    /// Merge another layer into this one; `other` wins on conflicts
    pub fn merge(&mut self, other: &DependencyInjection) -> &mut Self {
        self.extend(
            other
                .rules
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// Selection recorded in this layer for `placeholder`
    pub fn get(&self, placeholder: &Placeholder) -> Option<&Selection> {
        self.rules.get(placeholder)
    }

    /// Iterate over the rules of this layer
    pub fn iter(&self) -> impl Iterator<Item = (&Placeholder, &Selection)> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the layer has no rule
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(Placeholder, Selection)> for DependencyInjection {
    fn from_iter<I: IntoIterator<Item = (Placeholder, Selection)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Ordered stack of DI layers with last-pushed-wins lookup
///
/// Stacks are assembled fresh for each resolution request; there is no
/// removal operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyInjectionContext {
    layers: Vec<DependencyInjection>,
}

impl DependencyInjectionContext {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer; the stack keeps its own snapshot of the rules
    pub fn push(&mut self, layer: DependencyInjection) {
        self.layers.push(layer);
    }

    /// Selection of the most recently pushed layer defining `placeholder`
    pub fn resolve(&self, placeholder: &Placeholder) -> Option<&Selection> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(placeholder))
    }

    /// Like [`resolve`](Self::resolve), failing when no layer answers
    pub fn resolve_required(&self, placeholder: &Placeholder) -> Result<&Selection> {
        self.resolve(placeholder)
            .ok_or_else(|| Error::unsatisfiable(placeholder.to_string()))
    }

    /// Resolve `placeholder`, following role aliases through the whole stack
    ///
    /// Fails when an alias chain dead-ends, loops, or is longer than
    /// `max_depth`.
    pub fn resolve_transitive(
        &self,
        placeholder: &Placeholder,
        max_depth: usize,
    ) -> Result<&Selection> {
        let mut current = placeholder.clone();
        let mut visited = BTreeSet::new();
        for _ in 0..max_depth {
            if !visited.insert(current.clone()) {
                return Err(Error::unsatisfiable(format!(
                    "{placeholder} (selection cycle through {current})"
                )));
            }
            match self.resolve_required(&current)? {
                Selection::Role(alias) => current = Placeholder::Role(alias.clone()),
                selection => return Ok(selection),
            }
        }
        Err(Error::unsatisfiable(format!(
            "{placeholder} (more than {max_depth} aliases)"
        )))
    }

    /// Layers from first pushed to last pushed
    pub fn layers(&self) -> &[DependencyInjection] {
        &self.layers
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack has no layer
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
