//! Application Layer - Robot Capability Binder
//!
//! This crate orchestrates the domain rules of `rcb-domain` into the
//! operations model authors and the instantiation engine call.
//!
//! ## Architecture
//!
//! The application layer:
//! - Owns the profiles and resolves their definitions against the DI layers
//! - Selects which bound service of a component answers an abstract request
//! - Reaches models only through the `ModelRegistry` port
//!
//! ## Use Cases
//!
//! - Profile composition and definition resolution ([`ProfileResolver`])
//! - Service selection with on-demand slave specialization ([`ServiceSelector`])
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `rcb-domain`: For entities, value objects and the registry port

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
