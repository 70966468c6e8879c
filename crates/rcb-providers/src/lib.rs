//! # Robot Capability Binder - Provider Implementations
//!
//! This crate contains the implementations of the ports declared in
//! `rcb-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Models | `ModelRegistry` | InMemory |
//!
//! ## Usage
//!
//! ```
//! use rcb_providers::models::InMemoryModelRegistry;
//! use rcb_domain::ports::ModelRegistry;
//! use rcb_domain::value_objects::ProvideOptions;
//!
//! let mut registry = InMemoryModelRegistry::new();
//! let image_source = registry.data_service_model("ImageSource").unwrap();
//! registry.add_output_port(image_source, "frame", "/base/Image").unwrap();
//! let cam = registry.component_model("Cam").unwrap();
//! registry.add_output_port(cam, "camera_frame_out", "/base/Image").unwrap();
//!
//! let image = registry
//!     .provides(
//!         cam,
//!         image_source,
//!         ProvideOptions::new("image").with_port_mapping("frame", "camera_frame_out"),
//!     )
//!     .unwrap();
//! assert_eq!(image.port_mappings_for_task().unwrap().get("frame"), Some("camera_frame_out"));
//! ```

// Re-export rcb-domain types commonly used with providers
pub use rcb_domain::error::{Error, Result};
pub use rcb_domain::ports::ModelRegistry;

/// Provider-specific constants
pub mod constants;

/// Model registry implementations
///
/// Implements `ModelRegistry` for the supported storage backends.
pub mod models;

pub use models::{InMemoryModelRegistry, RegistryOptions};
