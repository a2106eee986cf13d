//! Error handling types

use thiserror::Error;

use crate::value_objects::{Category, ServiceId};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

fn render_chain(chain: &[ServiceId]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Main error type for service composition and lookup
///
/// Composition errors (`MissingField`, `ProfileNotFound`,
/// `UnresolvedReference`, `CircularReference`, `UnknownServiceType`,
/// `Configuration`) abort startup. Lookup errors (`UnknownName`,
/// `Construction`, `UnsupportedMethod`) happen after a successful
/// composition and are the caller's to handle.
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration field is absent or empty
    #[error("Configuration error: {category} entry \"{entry}\" is missing required field \"{field}\"")]
    MissingField {
        /// Category whose registrar detected the problem
        category: Category,
        /// Entry (tenant, provider, system...) the field belongs to
        entry: String,
        /// Name of the missing field
        field: String,
    },

    /// A payment provider selects a profile it does not define
    #[error(
        "Payment provider \"{provider}\" is configured to use profile \"{profile}\", but profile is not defined"
    )]
    ProfileNotFound {
        /// Provider name
        provider: String,
        /// Selected profile name
        profile: String,
    },

    /// A cross reference targets a service that was never registered
    #[error("Unresolved reference: {from} depends on {to}, which is not registered")]
    UnresolvedReference {
        /// Service holding the reference
        from: ServiceId,
        /// Missing target
        to: ServiceId,
    },

    /// Definitions reference each other in a cycle
    #[error("Circular reference: {}", render_chain(.chain))]
    CircularReference {
        /// Services forming the cycle, first element repeated at the end
        chain: Vec<ServiceId>,
    },

    /// A locator was queried for a name it does not hold
    #[error("No {category} registered for \"{name}\"")]
    UnknownName {
        /// Category of the queried locator
        category: Category,
        /// Queried name
        name: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// A definition names an implementation no constructor is registered for
    #[error("Unknown service type \"{type_id}\". Available types: {available:?}")]
    UnknownServiceType {
        /// Symbolic implementation id
        type_id: String,
        /// Registered implementation ids
        available: Vec<String>,
    },

    /// A constructor failed to build a service
    #[error("Failed to construct {service}: {message}")]
    Construction {
        /// Rendered id of the service being built
        service: String,
        /// Description of the failure
        message: String,
    },

    /// A recorded method call is not supported by the constructed service
    #[error("Service type \"{service_type}\" does not support method \"{method}\"")]
    UnsupportedMethod {
        /// Implementation id of the receiver
        service_type: String,
        /// Method name
        method: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error (loading, parsing, semantic checks)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON conversion error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Composition error creation methods
impl Error {
    /// Create a missing field error
    pub fn missing_field<E: Into<String>, F: Into<String>>(
        category: Category,
        entry: E,
        field: F,
    ) -> Self {
        Self::MissingField {
            category,
            entry: entry.into(),
            field: field.into(),
        }
    }

    /// Create a payment profile validation error
    pub fn profile_not_found<P: Into<String>, N: Into<String>>(provider: P, profile: N) -> Self {
        Self::ProfileNotFound {
            provider: provider.into(),
            profile: profile.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved_reference(from: ServiceId, to: ServiceId) -> Self {
        Self::UnresolvedReference { from, to }
    }

    /// Create a configuration error (simple)
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

// Lookup and construction error creation methods
impl Error {
    /// Create an unknown name error
    pub fn unknown_name<S: Into<String>>(category: Category, name: S) -> Self {
        Self::UnknownName {
            category,
            name: name.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a construction error
    pub fn construction<I: ToString, S: Into<String>>(service: I, message: S) -> Self {
        Self::Construction {
            service: service.to_string(),
            message: message.into(),
        }
    }

    /// Create an unsupported method error
    pub fn unsupported_method<T: Into<String>, M: Into<String>>(service_type: T, method: M) -> Self {
        Self::UnsupportedMethod {
            service_type: service_type.into(),
            method: method.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// I/O and internal error creation methods
impl Error {
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

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Whether the error stems from configuration and must abort composition
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::ProfileNotFound { .. }
                | Self::UnresolvedReference { .. }
                | Self::CircularReference { .. }
                | Self::UnknownServiceType { .. }
                | Self::Configuration { .. }
        )
    }

    /// Whether the error was raised while looking up or building a service
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownName { .. }
                | Self::NotFound { .. }
                | Self::Construction { .. }
                | Self::UnsupportedMethod { .. }
        )
    }
}
