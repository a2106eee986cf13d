//! Index Service Attribute Value Objects
//!
//! Raw attribute configuration as read from the index-service tenant
//! section, and the typed attribute an [`AttributeFactory`] builds from it.
//!
//! [`AttributeFactory`]: crate::ports::AttributeFactory

use serde::{Deserialize, Serialize};

use super::Options;

/// Raw configuration of one indexed attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeConfig {
    /// Attribute name (required)
    pub name: String,
    /// Source field name, defaults to `name`
    pub field_name: Option<String>,
    /// Column type in the index
    #[serde(rename = "type")]
    pub attribute_type: Option<String>,
    /// Locale used to read localized fields
    pub locale: Option<String>,
    /// Filter group the attribute belongs to
    pub filter_group: Option<String>,
    /// Free-form attribute options
    pub options: Options,
    /// Implementation id of the value getter
    pub getter_id: Option<String>,
    /// Options passed to the getter
    pub getter_options: Options,
    /// Implementation id of the value interpreter
    pub interpreter_id: Option<String>,
    /// Options passed to the interpreter
    pub interpreter_options: Options,
    /// Hide the attribute in field lists of the datatype
    pub hide_in_fieldlist_datatype: bool,
}

/// Getter or interpreter attached to an attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeHelper {
    /// Implementation id
    pub id: String,
    /// Options passed to the helper
    pub options: Options,
}

/// Value Object: Index Attribute
///
/// ## Business Rules
///
/// - `name` is never empty
/// - `field_name` falls back to `name`
/// - Getter and interpreter options only exist together with their helper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Source field name
    pub field_name: String,
    /// Column type in the index
    pub attribute_type: Option<String>,
    /// Locale used to read localized fields
    pub locale: Option<String>,
    /// Filter group the attribute belongs to
    pub filter_group: Option<String>,
    /// Free-form attribute options
    pub options: Options,
    /// Value getter
    pub getter: Option<AttributeHelper>,
    /// Value interpreter
    pub interpreter: Option<AttributeHelper>,
    /// Hide the attribute in field lists of the datatype
    pub hide_in_fieldlist_datatype: bool,
}
