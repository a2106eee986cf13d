//! Default index attribute factory

use ecf_domain::error::{Error, Result};
use ecf_domain::ports::AttributeFactory;
use ecf_domain::value_objects::{Attribute, AttributeConfig, AttributeHelper, Options};

/// Builds [`Attribute`]s from raw configuration
///
/// `field_name` falls back to the attribute name. Getter and interpreter
/// options are only accepted together with the matching implementation id.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAttributeFactory;

impl DefaultAttributeFactory {
    fn helper(
        attribute: &str,
        kind: &str,
        id: Option<&String>,
        options: &Options,
    ) -> Result<Option<AttributeHelper>> {
        match id {
            Some(id) => Ok(Some(AttributeHelper {
                id: id.clone(),
                options: options.clone(),
            })),
            None if options.is_empty() => Ok(None),
            None => Err(Error::configuration(format!(
                "Index attribute \"{attribute}\" has {kind} options but no {kind}_id"
            ))),
        }
    }
}

impl AttributeFactory for DefaultAttributeFactory {
    fn create_attributes(&self, config: &[AttributeConfig]) -> Result<Vec<Attribute>> {
        config
            .iter()
            .map(|attribute| {
                if attribute.name.trim().is_empty() {
                    return Err(Error::configuration("Index attribute without a name"));
                }
                let name = attribute.name.clone();
                Ok(Attribute {
                    field_name: attribute.field_name.clone().unwrap_or_else(|| name.clone()),
                    attribute_type: attribute.attribute_type.clone(),
                    locale: attribute.locale.clone(),
                    filter_group: attribute.filter_group.clone(),
                    options: attribute.options.clone(),
                    getter: Self::helper(
                        &name,
                        "getter",
                        attribute.getter_id.as_ref(),
                        &attribute.getter_options,
                    )?,
                    interpreter: Self::helper(
                        &name,
                        "interpreter",
                        attribute.interpreter_id.as_ref(),
                        &attribute.interpreter_options,
                    )?,
                    hide_in_fieldlist_datatype: attribute.hide_in_fieldlist_datatype,
                    name,
                })
            })
            .collect()
    }
}
