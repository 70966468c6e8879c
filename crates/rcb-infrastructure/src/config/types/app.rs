//! Main application configuration

use super::logging::LoggingConfig;
use super::resolution::ResolutionConfig;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model resolution configuration
    #[serde(default)]
    pub resolution: ResolutionConfig,
}
