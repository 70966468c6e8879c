//! Domain layer constants
//!
//! Naming conventions shared by the registry implementations and the
//! resolution rules. Infrastructure-specific constants remain in
//! `rcb_infrastructure::constants`.

// ============================================================================
// SERVICE NAMING CONSTANTS
// ============================================================================

/// Separator between a master service name and a slave name in a full name
pub const SLAVE_NAME_SEPARATOR: &str = ".";

/// Separator between a component name and a service full name in short names
pub const SERVICE_SHORT_NAME_SEPARATOR: &str = ":";

// ============================================================================
// SPECIALIZATION CONSTANTS
// ============================================================================

/// Opening delimiter of the tag appended to specialized model names
pub const SPECIALIZATION_TAG_OPEN: &str = "<";

/// Closing delimiter of the tag appended to specialized model names
pub const SPECIALIZATION_TAG_CLOSE: &str = ">";

/// Default bound on the number of role aliases followed by a transitive lookup
pub const DEFAULT_MAX_SELECTION_DEPTH: usize = 32;

/// Build the name of a specialized model, e.g. `Camera<needs-zoom>`
pub fn specialized_name(base: &str, tag: &str) -> String {
    format!("{base}{SPECIALIZATION_TAG_OPEN}{tag}{SPECIALIZATION_TAG_CLOSE}")
}

/// Build the full name of a slave service from its master's full name
pub fn slave_full_name(master: &str, name: &str) -> String {
    format!("{master}{SLAVE_NAME_SEPARATOR}{name}")
}
