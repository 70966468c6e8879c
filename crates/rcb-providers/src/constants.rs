//! Provider Constants
//!
//! Constants specific to model registry implementations. These are separated
//! from domain constants (which live in rcb-domain) and infrastructure
//! constants.

// ============================================================================
// MODEL REGISTRY CONSTANTS
// ============================================================================

/// Name reported by the in-memory model registry
pub const REGISTRY_PROVIDER_IN_MEMORY: &str = "in_memory";

/// Whether `provides` requires identical port type names by default
pub const DEFAULT_STRICT_PORT_TYPES: bool = true;

/// Whether dynamic services may create missing ports by default
pub const DEFAULT_ALLOW_DYNAMIC_PORTS: bool = true;
