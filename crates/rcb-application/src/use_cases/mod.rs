//! Use Cases
//!
//! | Use case | Implements |
//! |----------|------------|
//! | [`ProfileResolver`] | [`DefinitionResolverInterface`](crate::DefinitionResolverInterface) |
//! | [`ServiceSelector`] | [`ServiceSelectorInterface`](crate::ServiceSelectorInterface) |

/// Profile composition and definition resolution
pub mod profile_resolver;
/// Service selection
pub mod service_selector;

pub use profile_resolver::ProfileResolver;
pub use service_selector::ServiceSelector;
