//! Domain Services
//!
//! Interfaces of the resolution services. Callers that only need to resolve
//! definitions or select services depend on these traits rather than on the
//! concrete use cases.
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DefinitionResolverInterface`] | Resolve named definitions with their DI context |
//! | [`ServiceSelectorInterface`] | Pick the bound service answering an abstract request |

/// Definition resolution interface
pub mod profiles;
/// Service selection interface
pub mod selection;

pub use profiles::DefinitionResolverInterface;
pub use selection::{SelectedService, ServiceSelectorInterface};
