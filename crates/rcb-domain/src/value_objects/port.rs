//! Port value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data flow direction of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Data flows into the model
    Input,
    /// Data flows out of the model
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// A named, typed port declared on a component or data service model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    /// Port name, unique per direction within a model
    pub name: String,
    /// Name of the data type carried by the port (e.g. `/base/samples/Frame`)
    pub type_name: String,
    /// Data flow direction
    pub direction: PortDirection,
}

impl Port {
    /// Create an input port
    pub fn input<N: Into<String>, T: Into<String>>(name: N, type_name: T) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            direction: PortDirection::Input,
        }
    }

    /// Create an output port
    pub fn output<N: Into<String>, T: Into<String>>(name: N, type_name: T) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            direction: PortDirection::Output,
        }
    }

    /// Whether this is an input port
    pub fn is_input(&self) -> bool {
        self.direction == PortDirection::Input
    }

    /// Whether this is an output port
    pub fn is_output(&self) -> bool {
        self.direction == PortDirection::Output
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}[{}]", self.direction, self.name, self.type_name)
    }
}
