//! Configuration management
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Configuration sections and their defaults |
//! | [`loader`] | Loading, validation and saving |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ResolutionConfig};
