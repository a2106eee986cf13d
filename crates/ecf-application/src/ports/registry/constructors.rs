//! Constructor registry
//!
//! Constructors register themselves via `#[linkme::distributed_slice]` and
//! are discovered at runtime, or are added explicitly at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ecf_domain::error::{Error, Result};
use ecf_domain::ports::{Arguments, Service};
use tracing::{debug, warn};

/// Registry entry for link-time constructors
///
/// Each implementation registers itself with this entry using
/// `#[linkme::distributed_slice(SERVICE_CONSTRUCTORS)]`. The entry contains
/// metadata and a factory function building the service from its
/// resolved arguments.
pub struct ServiceConstructorEntry {
    /// Unique implementation id (e.g., "multi_cart_manager")
    pub type_id: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating the service
    pub factory: fn(Arguments) -> std::result::Result<Box<dyn Service>, String>,
}

// Auto-collection via linkme distributed slices - implementations submit entries at compile time
#[linkme::distributed_slice]
pub static SERVICE_CONSTRUCTORS: [ServiceConstructorEntry] = [..];

type Constructor = Arc<dyn Fn(Arguments) -> Result<Box<dyn Service>> + Send + Sync>;

#[derive(Clone)]
struct RegisteredConstructor {
    description: String,
    factory: Constructor,
}

/// Explicit `type_id -> constructor` registry
///
/// Cloning is cheap; constructors are shared.
#[derive(Clone, Default)]
pub struct ConstructorRegistry {
    constructors: BTreeMap<String, RegisteredConstructor>,
}

impl ConstructorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every link-time constructor
    ///
    /// When two entries share a type id the first one wins.
    pub fn linked() -> Self {
        let mut registry = Self::new();
        for entry in SERVICE_CONSTRUCTORS {
            if registry.contains(entry.type_id) {
                warn!(type_id = entry.type_id, "Duplicate linked constructor ignored");
                continue;
            }
            let factory = entry.factory;
            let type_id = entry.type_id;
            registry.insert(type_id, entry.description, move |arguments| {
                factory(arguments).map_err(|message| Error::construction(type_id, message))
            });
        }
        debug!(count = registry.len(), "Collected linked service constructors");
        registry
    }

    /// Add every link-time constructor whose type id is not registered yet
    ///
    /// Explicit registrations take precedence over linked ones.
    pub fn with_linked(mut self) -> Self {
        for (type_id, entry) in Self::linked().constructors {
            self.constructors.entry(type_id).or_insert(entry);
        }
        self
    }

    /// Register (or replace) the constructor of a type id
    pub fn register<F>(
        &mut self,
        type_id: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> &mut Self
    where
        F: Fn(Arguments) -> Result<Box<dyn Service>> + Send + Sync + 'static,
    {
        let type_id = type_id.into();
        if self.contains(&type_id) {
            debug!(type_id = %type_id, "Replacing service constructor");
        }
        self.insert(type_id, description, factory);
        self
    }

    /// Register a constructor (builder style)
    pub fn with<F>(
        mut self,
        type_id: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> Self
    where
        F: Fn(Arguments) -> Result<Box<dyn Service>> + Send + Sync + 'static,
    {
        self.register(type_id, description, factory);
        self
    }

    fn insert<F>(&mut self, type_id: impl Into<String>, description: impl Into<String>, factory: F)
    where
        F: Fn(Arguments) -> Result<Box<dyn Service>> + Send + Sync + 'static,
    {
        self.constructors.insert(
            type_id.into(),
            RegisteredConstructor {
                description: description.into(),
                factory: Arc::new(factory),
            },
        );
    }

    /// Whether a constructor is registered for the type id
    pub fn contains(&self, type_id: &str) -> bool {
        self.constructors.contains_key(type_id)
    }

    /// Build a service of the given type
    ///
    /// # Returns
    /// * `Ok(Box<dyn Service>)` - Freshly constructed, not yet shared instance
    /// * `Err(Error::UnknownServiceType)` - No constructor for `type_id`
    /// * `Err(_)` - Whatever the constructor reported
    pub fn construct(&self, type_id: &str, arguments: Arguments) -> Result<Box<dyn Service>> {
        let constructor = self
            .constructors
            .get(type_id)
            .ok_or_else(|| self.unknown_type(type_id))?;
        (constructor.factory)(arguments)
    }

    /// Error describing an unknown type id, listing the registered ones
    pub fn unknown_type(&self, type_id: &str) -> Error {
        Error::UnknownServiceType {
            type_id: type_id.to_string(),
            available: self.type_ids(),
        }
    }

    /// Registered type ids, sorted
    pub fn type_ids(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    /// `(type_id, description)` pairs, sorted by type id
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.constructors
            .iter()
            .map(|(type_id, entry)| (type_id.as_str(), entry.description.as_str()))
            .collect()
    }

    /// Number of registered constructors
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether no constructor is registered
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for ConstructorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorRegistry")
            .field("type_ids", &self.type_ids())
            .finish()
    }
}

/// List all link-time constructors
///
/// Returns `(type_id, description)` tuples. Useful for CLI help.
pub fn list_linked_constructors() -> Vec<(&'static str, &'static str)> {
    SERVICE_CONSTRUCTORS
        .iter()
        .map(|entry| (entry.type_id, entry.description))
        .collect()
}
