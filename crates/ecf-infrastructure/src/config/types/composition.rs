//! Composition engine settings

use serde::{Deserialize, Serialize};

/// Settings of the composition engine itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionSettings {
    /// Check at composition time that every implementation id in the graph
    /// has a registered constructor
    pub verify_service_types: bool,
}
