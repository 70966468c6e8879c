//! Identifiers
//!
//! Models and profiles are owned by arenas (the model registry and the
//! profile resolver). Everything else refers to them through these copyable
//! indices, so a service never owns the component that provides it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a component or data service model inside a model registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModelId(usize);

impl ModelId {
    /// Wrap a raw registry index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw registry index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model#{}", self.0)
    }
}

/// Index of a profile inside a profile resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfileId(usize);

impl ProfileId {
    /// Wrap a raw resolver index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw resolver index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile#{}", self.0)
    }
}
