//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `rcb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rcb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rcb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RCB";

/// Separator between nested keys in configuration environment variables
///
/// `RCB_RESOLUTION__MAX_SELECTION_DEPTH` sets `resolution.max_selection_depth`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "RCB_LOG";

/// File name stem used when the configured log file has none
pub const DEFAULT_LOG_FILE_STEM: &str = "rcb";
