//! Service Definition Model
//!
//! A [`ServiceDefinition`] is a recipe, not an instance: the symbolic id of
//! an externally supplied implementation plus named constructor arguments.
//! Arguments are literal configuration values, references to other
//! registered definitions, inline (private) definitions, or maps of those.
//!
//! ```text
//! ServiceDefinition("multi_cart_manager")
//! ├── cart_factory            Inline(ServiceDefinition("cart_factory"))
//! ├── price_calculator_factory Inline(ServiceDefinition(...))
//! └── order_manager           Reference(ecommerce.order_manager.store1)
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::value_objects::{Category, ServiceId, ServiceKey};

/// Symbolic pointer at another registered definition
///
/// Resolution is lazy: building the dependent service builds (or fetches
/// the cached instance of) the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CrossReference {
    target: ServiceId,
}

impl CrossReference {
    /// Reference a service by id
    pub fn new(target: ServiceId) -> Self {
        Self { target }
    }

    /// Reference a service by category and key
    pub fn to(category: Category, key: impl Into<ServiceKey>) -> Self {
        Self::new(ServiceId::new(category, key))
    }

    /// Id of the referenced service
    pub fn target(&self) -> &ServiceId {
        &self.target
    }
}

/// Constructor argument of a definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    /// Configuration value passed through verbatim
    Literal(serde_json::Value),
    /// Another registered (shared) service
    Reference(CrossReference),
    /// Private definition built for this owner only
    Inline(Box<ServiceDefinition>),
    /// Named group of arguments, e.g. filter types by name
    Map(BTreeMap<String, Argument>),
}

impl Argument {
    /// Literal argument from any serializable value
    pub fn literal<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Argument::Literal(serde_json::to_value(value)?))
    }

    /// Reference argument
    pub fn reference(target: ServiceId) -> Self {
        Argument::Reference(CrossReference::new(target))
    }

    /// Inline definition argument
    pub fn inline(definition: ServiceDefinition) -> Self {
        Argument::Inline(Box::new(definition))
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a CrossReference>) {
        match self {
            Argument::Literal(_) => {}
            Argument::Reference(reference) => out.push(reference),
            Argument::Inline(definition) => definition.collect_references(out),
            Argument::Map(entries) => entries
                .values()
                .for_each(|argument| argument.collect_references(out)),
        }
    }

    fn collect_type_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Argument::Literal(_) | Argument::Reference(_) => {}
            Argument::Inline(definition) => definition.collect_type_ids(out),
            Argument::Map(entries) => entries
                .values()
                .for_each(|argument| argument.collect_type_ids(out)),
        }
    }
}

impl From<CrossReference> for Argument {
    fn from(reference: CrossReference) -> Self {
        Argument::Reference(reference)
    }
}

impl From<ServiceDefinition> for Argument {
    fn from(definition: ServiceDefinition) -> Self {
        Argument::inline(definition)
    }
}

/// Method invocation applied once, right after construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCall {
    /// Method name understood by the receiving service
    pub method: String,
    /// Positional arguments
    pub arguments: Vec<Argument>,
}

/// Discovery label attached to a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Tag attributes
    pub attributes: BTreeMap<String, String>,
}

impl Tag {
    /// Create a tag without attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Attribute value by key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Recipe for building one service instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDefinition {
    type_id: String,
    arguments: BTreeMap<String, Argument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    method_calls: Vec<MethodCall>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl ServiceDefinition {
    /// Definition of the given implementation without arguments
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            arguments: BTreeMap::new(),
            method_calls: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Plain alias to an externally supplied implementation
    pub fn alias(type_id: impl Into<String>) -> Self {
        Self::new(type_id)
    }

    /// Set a named argument (builder style)
    pub fn with_argument(mut self, name: impl Into<String>, argument: impl Into<Argument>) -> Self {
        self.set_argument(name, argument);
        self
    }

    /// Set a named literal argument (builder style)
    pub fn with_literal<T: Serialize + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        self.set_argument(name, Argument::literal(value)?);
        Ok(self)
    }

    /// Set a named argument
    pub fn set_argument(&mut self, name: impl Into<String>, argument: impl Into<Argument>) {
        self.arguments.insert(name.into(), argument.into());
    }

    /// Record a method call applied after construction
    pub fn add_method_call(&mut self, method: impl Into<String>, arguments: Vec<Argument>) {
        self.method_calls.push(MethodCall {
            method: method.into(),
            arguments,
        });
    }

    /// Attach a tag
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Attach a tag (builder style)
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.add_tag(tag);
        self
    }

    /// Symbolic implementation id
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Named constructor arguments
    pub fn arguments(&self) -> &BTreeMap<String, Argument> {
        &self.arguments
    }

    /// Argument by name
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    /// Recorded method calls, in registration order
    pub fn method_calls(&self) -> &[MethodCall] {
        &self.method_calls
    }

    /// Attached tags
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// First tag with the given name
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    /// Every cross reference reachable from this definition, including
    /// those inside inline definitions, maps and method calls
    pub fn references(&self) -> Vec<&CrossReference> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    /// This definition's type id followed by the type ids of all inline definitions
    pub fn type_ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_type_ids(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a CrossReference>) {
        self.arguments
            .values()
            .chain(self.method_calls.iter().flat_map(|call| call.arguments.iter()))
            .for_each(|argument| argument.collect_references(out));
    }

    fn collect_type_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.type_id);
        self.arguments
            .values()
            .chain(self.method_calls.iter().flat_map(|call| call.arguments.iter()))
            .for_each(|argument| argument.collect_type_ids(out));
    }
}
