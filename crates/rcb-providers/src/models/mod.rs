//! Model registry implementations
//!
//! | Registry | Description |
//! |----------|-------------|
//! | [`InMemoryModelRegistry`] | Vector-backed store, models live as long as the registry |

/// In-memory model registry
pub mod in_memory;
mod projection;

pub use in_memory::{InMemoryModelRegistry, RegistryOptions};
