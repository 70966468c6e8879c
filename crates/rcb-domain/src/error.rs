//! Error handling types
//!
//! Every error raised while assembling a model is an authoring-time error:
//! none of them is transient, none of them is retried. They carry enough
//! context (profile, definition, service, task) to locate the faulty
//! declaration.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Robot Capability Binder
#[derive(Error, Debug)]
pub enum Error {
    /// A profile was asked for a definition it does not have
    #[error("profile {profile} has no definition called {name}")]
    MissingDefinition {
        /// Name of the profile that was queried
        profile: String,
        /// The requested definition name
        name: String,
    },

    /// A bound service was asked for a capability view it was never built with
    #[error("{service} is not provided by {binding}")]
    MissingMapping {
        /// The service model (or logical port) that has no mapping
        service: String,
        /// The binding that was queried
        binding: String,
    },

    /// A task does not structurally fulfill the component model of a binding
    #[error("cannot bind {binding} on {task}: does not fullfill {component}")]
    Incompatible {
        /// The binding being attached
        binding: String,
        /// The task instance
        task: String,
        /// The component model the task should fulfill
        component: String,
    },

    /// No reachable DI layer provides a selection for a placeholder
    #[error("unsatisfiable argument: no selection for {placeholder}")]
    UnsatisfiableArgument {
        /// The placeholder that could not be resolved
        placeholder: String,
    },

    /// Several services match a request and nothing disambiguates them
    #[error("multiple services of {component} fulfill {service}: {}", candidates.join(", "))]
    AmbiguousService {
        /// The component model that was searched
        component: String,
        /// The requested service model
        service: String,
        /// Full names of the matching services
        candidates: Vec<String>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure-level error (logging setup, file system layout)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a missing definition error
    pub fn missing_definition<P: Into<String>, N: Into<String>>(profile: P, name: N) -> Self {
        Self::MissingDefinition {
            profile: profile.into(),
            name: name.into(),
        }
    }

    /// Create a missing port mapping error
    pub fn missing_mapping<S: Into<String>, B: Into<String>>(service: S, binding: B) -> Self {
        Self::MissingMapping {
            service: service.into(),
            binding: binding.into(),
        }
    }

    /// Create a bind-time incompatibility error
    pub fn incompatible<B: Into<String>, T: Into<String>, C: Into<String>>(
        binding: B,
        task: T,
        component: C,
    ) -> Self {
        Self::Incompatible {
            binding: binding.into(),
            task: task.into(),
            component: component.into(),
        }
    }

    /// Create an unsatisfiable argument error
    pub fn unsatisfiable<S: Into<String>>(placeholder: S) -> Self {
        Self::UnsatisfiableArgument {
            placeholder: placeholder.into(),
        }
    }

    /// Create an ambiguous service selection error
    pub fn ambiguous_service<C: Into<String>, S: Into<String>>(
        component: C,
        service: S,
        candidates: Vec<String>,
    ) -> Self {
        Self::AmbiguousService {
            component: component.into(),
            service: service.into(),
            candidates,
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }


    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
