//! Service Instance Port
//!
//! Constructed services are handed around as `Arc<dyn Service>`. Callers
//! that know the concrete implementation recover it with
//! [`downcast_arc`](Service::downcast_arc) or `downcast_ref`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// A constructed service instance
///
/// # Example
///
/// ```
/// use ecf_domain::ports::{ResolvedArgument, Service};
/// use ecf_domain::error::Result;
///
/// #[derive(Debug, Default)]
/// struct TrackingManager {
///     trackers: Vec<String>,
/// }
///
/// impl Service for TrackingManager {
///     fn service_type(&self) -> &str {
///         "tracking_manager"
///     }
///
///     fn call(&mut self, method: &str, arguments: Vec<ResolvedArgument>) -> Result<()> {
///         for argument in arguments {
///             if let ResolvedArgument::Service(tracker) = argument {
///                 self.trackers.push(tracker.service_type().to_string());
///             }
///         }
///         let _ = method;
///         Ok(())
///     }
/// }
/// ```
pub trait Service: DowncastSync + fmt::Debug {
    /// Symbolic implementation id the service was built from
    fn service_type(&self) -> &str;

    /// Apply a method call recorded on the definition
    ///
    /// Called once per recorded call, in order, before the instance is shared.
    fn call(&mut self, method: &str, arguments: Vec<ResolvedArgument>) -> Result<()> {
        let _ = arguments;
        Err(Error::unsupported_method(self.service_type(), method))
    }
}

impl_downcast!(sync Service);

/// Constructor argument after reference resolution
#[derive(Debug, Clone)]
pub enum ResolvedArgument {
    /// Configuration value
    Value(serde_json::Value),
    /// Constructed dependency
    Service(Arc<dyn Service>),
    /// Named group of resolved arguments
    Map(BTreeMap<String, ResolvedArgument>),
}

impl ResolvedArgument {
    /// The configuration value, if this is a literal
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            ResolvedArgument::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The dependency, if this is a service
    pub fn as_service(&self) -> Option<&Arc<dyn Service>> {
        match self {
            ResolvedArgument::Service(service) => Some(service),
            _ => None,
        }
    }

    /// The entries, if this is a map
    pub fn as_map(&self) -> Option<&BTreeMap<String, ResolvedArgument>> {
        match self {
            ResolvedArgument::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Named constructor arguments handed to a constructor
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: BTreeMap<String, ResolvedArgument>,
}

impl Arguments {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resolved argument
    pub fn insert(&mut self, name: impl Into<String>, argument: ResolvedArgument) {
        self.values.insert(name.into(), argument);
    }

    /// Argument by name
    pub fn get(&self, name: &str) -> Option<&ResolvedArgument> {
        self.values.get(name)
    }

    /// Whether an argument is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Argument names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Literal argument by name
    pub fn literal(&self, name: &str) -> Option<&serde_json::Value> {
        self.get(name).and_then(ResolvedArgument::as_value)
    }

    /// Deserialize a required literal argument
    pub fn literal_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .literal(name)
            .ok_or_else(|| Error::invalid_argument(format!("missing literal argument \"{name}\"")))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Service argument by name
    pub fn service(&self, name: &str) -> Option<Arc<dyn Service>> {
        self.get(name).and_then(ResolvedArgument::as_service).cloned()
    }

    /// Service argument downcast to its concrete type
    pub fn service_as<T: Service>(&self, name: &str) -> Option<Arc<T>> {
        self.service(name)
            .and_then(|service| service.downcast_arc::<T>().ok())
    }

    /// Map argument by name
    pub fn map(&self, name: &str) -> Option<&BTreeMap<String, ResolvedArgument>> {
        self.get(name).and_then(ResolvedArgument::as_map)
    }
}
