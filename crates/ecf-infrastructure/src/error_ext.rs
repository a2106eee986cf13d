//! Error extension utilities
//!
//! Context extension methods turning foreign errors (I/O, figment, TOML)
//! into the domain [`Error`], plus required-value lookups.

use std::fmt;

use ecf_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use ecf_infrastructure::error_ext::ErrorContext;
///
/// // Add context to file operations
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::io_with_source(format!("{}: {}", context, err), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{}: {}", context, err), err))
    }
}

/// Extension methods for `Option` values that are required
pub trait OptionExt<T> {
    /// Turn `None` into a not-found error naming the resource
    fn ok_or_not_found<S: Into<String>>(self, resource: S) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found<S: Into<String>>(self, resource: S) -> Result<T> {
        self.ok_or_else(|| Error::not_found(resource))
    }
}
