//! Task handles

use super::ids::ModelId;
use crate::ports::TaskInstance;
use serde::{Deserialize, Serialize};

/// A task instance known by its name and runtime model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Instance name
    pub name: String,
    /// Runtime model of the instance
    pub model: ModelId,
}

impl TaskRef {
    /// Create a task handle
    pub fn new(name: impl Into<String>, model: ModelId) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }
}

impl TaskInstance for TaskRef {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> ModelId {
        self.model
    }
}
