//! # Robot Capability Binder
//!
//! Resolves which concrete component model fills an abstract capability
//! request, and how the logical ports of the requested service map onto the
//! concrete ports of that component.
//!
//! ## Features
//!
//! - **Profiles**: named definitions composed from other profiles, with
//!   layered dependency injection rules
//! - **Service Binding**: one port mapping table per fulfilled service model,
//!   viewable as any of them
//! - **Dynamic Slaves**: slave services created on demand on a private
//!   specialization of the component, never on the shared model
//!
//! ## Example
//!
//! ```
//! use rcb::application::ServiceSelectorInterface;
//! use rcb::domain::ports::ModelRegistry;
//! use rcb::domain::value_objects::{DynamicSlaveOptions, ProvideOptions};
//! use rcb::providers::InMemoryModelRegistry;
//! use rcb::application::ServiceSelector;
//!
//! let mut registry = InMemoryModelRegistry::new();
//! let image_source = registry.data_service_model("base::ImageSource").unwrap();
//! registry.add_output_port(image_source, "frame", "/base/Image").unwrap();
//! let zoom = registry.data_service_model("base::Zoom").unwrap();
//! registry.add_input_port(zoom, "zoom_level", "/double").unwrap();
//!
//! let cam = registry.component_model("Cam").unwrap();
//! registry.add_output_port(cam, "frame", "/base/Image").unwrap();
//! registry.provides(cam, image_source, ProvideOptions::new("image")).unwrap();
//! registry
//!     .data_service_mut(cam, "image")
//!     .unwrap()
//!     .dynamic_slaves(zoom, DynamicSlaveOptions::new(), None);
//!
//! let selected = ServiceSelector::new()
//!     .select(&mut registry, cam, zoom, Some("zoom"), "needs-zoom")
//!     .unwrap();
//! assert_eq!(selected.service.full_name(), "image.zoom");
//! assert_eq!(registry.name(selected.component).unwrap(), "Cam<needs-zoom>");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Core types and rules (entities, value objects, ports, errors)
//! - `application` - Profile resolution and service selection
//! - `providers` - Model registry implementations
//! - `infrastructure` - Configuration, logging and bootstrap

/// Domain layer - core types and rules
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rcb_domain::*;
}

/// Application layer - profile resolution and service selection
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use rcb_application::*;
}

/// Providers - model registry implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use rcb_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use rcb_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result};

// Re-export main entry point at the crate root
pub use infrastructure::{AppConfig, ConfigLoader, ResolutionEnvironment, init_environment};
