//! Per-category locators
//!
//! A [`Locator`] is an immutable, name-keyed view of one category. It holds
//! no instances itself; lookups go through the shared
//! [`ServiceContainer`], which constructs on first use.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ecf_domain::definition::ServiceDefinition;
use ecf_domain::error::{Error, Result};
use ecf_domain::ports::Service;
use ecf_domain::value_objects::{Category, LocatorKey, ServiceId};

use super::container::ServiceContainer;

/// Read-only registry of one category, keyed by tenant/system/provider name
/// (`String`) or by [`CheckoutKey`](ecf_domain::value_objects::CheckoutKey)
pub struct Locator<K: LocatorKey = String> {
    category: Category,
    entries: BTreeMap<K, ServiceId>,
    container: Arc<ServiceContainer>,
}

impl<K: LocatorKey> Locator<K> {
    /// Build the locator of `category` from the container's definitions
    ///
    /// Only keys of type `K` are picked up; the root service of a category
    /// is never a locator entry.
    pub fn build(category: Category, container: Arc<ServiceContainer>) -> Self {
        let entries = container
            .definitions()
            .ids_in(category)
            .filter_map(|id| K::from_service_key(&id.key).map(|key| (key, id.clone())))
            .collect();
        Self {
            category,
            entries,
            container,
        }
    }

    /// Category the locator publishes
    pub fn category(&self) -> Category {
        self.category
    }

    /// Service registered under `key`
    ///
    /// # Errors
    /// `UnknownName` if nothing is registered under `key`, including entries
    /// skipped because they are disabled.
    pub fn get<Q>(&self, key: &Q) -> Result<Arc<dyn Service>>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let id = self.service_id(key)?;
        self.container.get(id)
    }

    /// Service registered under `key`, downcast to its concrete type
    pub fn get_as<T, Q>(&self, key: &Q) -> Result<Arc<T>>
    where
        T: Service,
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let service = self.get(key)?;
        let service_type = service.service_type().to_string();
        service.downcast_arc::<T>().map_err(|_| {
            Error::invalid_argument(format!(
                "{} \"{key}\" is a \"{service_type}\", not the requested type",
                self.category
            ))
        })
    }

    /// Whether a service is registered under `key`
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Id of the service registered under `key`
    pub fn service_id<Q>(&self, key: &Q) -> Result<&ServiceId>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.entries
            .get(key)
            .ok_or_else(|| Error::unknown_name(self.category, key.to_string()))
    }

    /// Definition registered under `key`
    pub fn definition<Q>(&self, key: &Q) -> Option<&ServiceDefinition>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .get(key)
            .and_then(|id| self.container.definition(id))
    }

    /// Registered keys, sorted
    pub fn names(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the locator has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: LocatorKey> Clone for Locator<K> {
    fn clone(&self) -> Self {
        Self {
            category: self.category,
            entries: self.entries.clone(),
            container: Arc::clone(&self.container),
        }
    }
}

impl<K: LocatorKey> fmt::Debug for Locator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("category", &self.category)
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
