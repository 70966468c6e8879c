//! Domain Port Interfaces
//!
//! Contracts between the resolution rules and the collaborators they do not
//! own: the model registry and the task instances produced by the
//! instantiation engine.
//!
//! ## Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ModelRegistry`] | Storage of component/service models and bound services |
//! | [`TaskInstance`] | Task instance a bound service can be attached to |

/// Model registry port
pub mod model_registry;
/// Task instance port
pub mod task;

pub use model_registry::ModelRegistry;
pub use task::TaskInstance;
