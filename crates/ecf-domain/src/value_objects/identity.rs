//! Service identities
//!
//! A [`ServiceId`] identifies one registered definition. It pairs a
//! [`Category`] with a [`ServiceKey`], so the same tenant name can live in
//! several categories without any implied relationship.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Category;
use crate::constants::{SERVICE_ID_PREFIX, SERVICE_ID_SEPARATOR};

/// Composite key of the checkout categories
///
/// `name` groups several tenant variants of the same checkout flow. Kept as
/// two fields so names containing the separator stay unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CheckoutKey {
    /// Checkout flow name
    pub name: String,
    /// Tenant variant of the flow
    pub tenant: String,
}

impl CheckoutKey {
    /// Create a new checkout key
    pub fn new(name: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tenant: tenant.into(),
        }
    }
}

impl fmt::Display for CheckoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, SERVICE_ID_SEPARATOR, self.tenant)
    }
}

/// Key of a service inside its category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKey {
    /// The single root service of a category
    Root,
    /// Tenant, system, provider or filter-service name
    Name(String),
    /// `(name, tenant)` pair of the checkout categories
    Checkout(CheckoutKey),
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKey::Root => Ok(()),
            ServiceKey::Name(name) => f.write_str(name),
            ServiceKey::Checkout(key) => write!(f, "{key}"),
        }
    }
}

impl From<String> for ServiceKey {
    fn from(name: String) -> Self {
        ServiceKey::Name(name)
    }
}

impl From<&str> for ServiceKey {
    fn from(name: &str) -> Self {
        ServiceKey::Name(name.to_string())
    }
}

impl From<CheckoutKey> for ServiceKey {
    fn from(key: CheckoutKey) -> Self {
        ServiceKey::Checkout(key)
    }
}

/// Key type usable in a typed locator
///
/// Converts into the [`ServiceKey`] stored in the definition set and is
/// rendered with `Display` in lookup errors.
pub trait LocatorKey:
    Clone + Ord + fmt::Debug + fmt::Display + Send + Sync + Into<ServiceKey> + 'static
{
    /// Convert a stored service key back into this key type
    fn from_service_key(key: &ServiceKey) -> Option<Self>;
}

impl LocatorKey for String {
    fn from_service_key(key: &ServiceKey) -> Option<Self> {
        match key {
            ServiceKey::Name(name) => Some(name.clone()),
            _ => None,
        }
    }
}

impl LocatorKey for CheckoutKey {
    fn from_service_key(key: &ServiceKey) -> Option<Self> {
        match key {
            ServiceKey::Checkout(key) => Some(key.clone()),
            _ => None,
        }
    }
}

/// Identity of a registered service definition
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceId {
    /// Category the service belongs to
    pub category: Category,
    /// Key inside the category
    pub key: ServiceKey,
}

impl ServiceId {
    /// Create an id from a category and key
    pub fn new(category: Category, key: impl Into<ServiceKey>) -> Self {
        Self {
            category,
            key: key.into(),
        }
    }

    /// Id of the root service of a category
    pub fn root(category: Category) -> Self {
        Self {
            category,
            key: ServiceKey::Root,
        }
    }

    /// Id of a named service (tenant, system, provider)
    pub fn named(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            key: ServiceKey::Name(name.into()),
        }
    }

    /// Id of a checkout service
    pub fn checkout(category: Category, key: CheckoutKey) -> Self {
        Self {
            category,
            key: ServiceKey::Checkout(key),
        }
    }

    /// Name of a named service, `None` for root and checkout ids
    pub fn name(&self) -> Option<&str> {
        match &self.key {
            ServiceKey::Name(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", SERVICE_ID_PREFIX, SERVICE_ID_SEPARATOR, self.category)?;
        match &self.key {
            ServiceKey::Root => Ok(()),
            key => write!(f, "{}{}", SERVICE_ID_SEPARATOR, key),
        }
    }
}
