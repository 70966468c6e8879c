//! Domain Layer - Robot Capability Binder
//!
//! Core types and rules of capability resolution: which concrete model fills
//! an abstract placeholder, and how the logical ports of a service map onto
//! the concrete ports of the component providing it.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines the error type shared by every crate of the workspace
//! - Holds value objects (ids, ports, port mappings, service options)
//! - Holds entities (DI layers, profiles, bound services, models)
//! - Declares the ports its collaborators implement (model registry, tasks)
//!
//! ## Dependencies
//!
//! This crate has no dependency on the other workspace crates. Model storage
//! is reached through [`ports::ModelRegistry`], implemented in
//! `rcb-providers`.

/// Naming constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error type and result alias
pub mod error;
/// Collaborator contracts
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
