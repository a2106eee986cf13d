//! Definition set
//!
//! A [`Registration`] is what one registrar pass produces; the engine merges
//! every registration into a single [`DefinitionSet`], which is frozen once
//! it is handed to the service container.

use std::collections::BTreeMap;

use ecf_domain::definition::{ServiceDefinition, Tag};
use ecf_domain::error::{Error, Result};
use ecf_domain::value_objects::{Category, ServiceId};
use serde::Serialize;
use tracing::debug;

/// Output of one registrar pass
#[derive(Debug, Default)]
pub struct Registration {
    definitions: Vec<(ServiceId, ServiceDefinition)>,
    parameters: Vec<(String, serde_json::Value)>,
    skipped: usize,
}

impl Registration {
    /// Create an empty registration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition
    pub fn define(&mut self, id: ServiceId, definition: ServiceDefinition) {
        self.definitions.push((id, definition));
    }

    /// Publish a configuration parameter
    pub fn set_parameter<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<()> {
        self.parameters.push((key.into(), serde_json::to_value(value)?));
        Ok(())
    }

    /// Count an entry that was skipped because it is disabled
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Registered definitions, in registration order
    pub fn definitions(&self) -> &[(ServiceId, ServiceDefinition)] {
        &self.definitions
    }

    /// Published parameters, in registration order
    pub fn parameters(&self) -> &[(String, serde_json::Value)] {
        &self.parameters
    }

    /// Number of skipped entries
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definition was produced
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definition by id
    pub fn get(&self, id: &ServiceId) -> Option<&ServiceDefinition> {
        self.definitions
            .iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, definition)| definition)
    }
}

/// All registered definitions and published parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefinitionSet {
    #[serde(serialize_with = "serialize_definitions")]
    definitions: BTreeMap<ServiceId, ServiceDefinition>,
    parameters: BTreeMap<String, serde_json::Value>,
}

impl DefinitionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a registration; ids and parameter keys must be new
    pub fn merge(&mut self, registration: Registration) -> Result<()> {
        for (id, definition) in registration.definitions {
            if self.definitions.contains_key(&id) {
                return Err(Error::configuration(format!(
                    "Service {id} is defined more than once"
                )));
            }
            debug!(service = %id, type_id = definition.type_id(), "Registered definition");
            self.definitions.insert(id, definition);
        }
        for (key, value) in registration.parameters {
            if self.parameters.contains_key(&key) {
                return Err(Error::configuration(format!(
                    "Parameter \"{key}\" is published more than once"
                )));
            }
            self.parameters.insert(key, value);
        }
        Ok(())
    }

    /// Definition by id
    pub fn get(&self, id: &ServiceId) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }

    /// Whether a definition is registered under `id`
    pub fn contains(&self, id: &ServiceId) -> bool {
        self.definitions.contains_key(id)
    }

    /// All definitions, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (&ServiceId, &ServiceDefinition)> {
        self.definitions.iter()
    }

    /// Ids registered in one category, ordered
    pub fn ids_in(&self, category: Category) -> impl Iterator<Item = &ServiceId> {
        self.definitions
            .keys()
            .filter(move |id| id.category == category)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Published parameter by key
    pub fn parameter(&self, key: &str) -> Option<&serde_json::Value> {
        self.parameters.get(key)
    }

    /// All published parameters
    pub fn parameters(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.parameters
    }

    /// Definitions carrying a tag with the given name, with that tag
    pub fn find_tagged(&self, name: &str) -> Vec<(&ServiceId, &Tag)> {
        self.definitions
            .iter()
            .filter_map(|(id, definition)| definition.tag(name).map(|tag| (id, tag)))
            .collect()
    }
}

// Rendered ids as map keys so the set serializes to plain JSON/TOML objects
fn serialize_definitions<S>(
    definitions: &BTreeMap<ServiceId, ServiceDefinition>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(definitions.iter().map(|(id, definition)| (id.to_string(), definition)))
}
