//! Attribute Factory Port

use crate::error::Result;
use crate::value_objects::{Attribute, AttributeConfig};

/// Builds typed index attributes from their raw configuration
///
/// Consumed by the index-service registrar; the list it returns is passed
/// verbatim as the `attributes` argument of the tenant configuration.
pub trait AttributeFactory: Send + Sync {
    /// Create one attribute per raw configuration entry, preserving order
    fn create_attributes(&self, config: &[AttributeConfig]) -> Result<Vec<Attribute>>;
}
