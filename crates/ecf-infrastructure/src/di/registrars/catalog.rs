use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ecf_domain::constants::*;
use ecf_domain::definition::{Argument, CrossReference, ServiceDefinition, Tag};
use ecf_domain::error::Result;
use ecf_domain::ports::AttributeFactory;
use ecf_domain::value_objects::{Category, ServiceId};
use tracing::warn;

use super::CategoryRegistrar;
use crate::config::{FilterServiceConfig, IndexServiceConfig};
use crate::di::definitions::Registration;
use crate::di::validation::require_field;

/// Registers the index service alias plus a configuration and a tagged
/// worker per enabled tenant
///
/// Workers are published under `index_service.{tenant}` and tagged with
/// `index_service.worker` so schedulers can discover all of them.
#[derive(Clone)]
pub struct IndexServiceRegistrar {
    attribute_factory: Arc<dyn AttributeFactory>,
}

impl IndexServiceRegistrar {
    /// Create a registrar using the given attribute factory
    pub fn new(attribute_factory: Arc<dyn AttributeFactory>) -> Self {
        Self { attribute_factory }
    }

}

impl fmt::Debug for IndexServiceRegistrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexServiceRegistrar").finish_non_exhaustive()
    }
}

impl CategoryRegistrar for IndexServiceRegistrar {
    type Config = IndexServiceConfig;

    fn category(&self) -> Category {
        Category::IndexService
    }

    fn register(&self, config: &IndexServiceConfig) -> Result<Registration> {
        let category = self.category();
        let index_service_id = require_field(
            category,
            category.as_str(),
            "index_service_id",
            Some(config.index_service_id.as_str()),
        )?;

        let mut registration = Registration::new();
        registration.define(
            ServiceId::root(category),
            ServiceDefinition::alias(index_service_id),
        );
        registration.set_parameter(PARAM_INDEX_DEFAULT_TENANT, &config.default_tenant)?;

        for (tenant, tenant_config) in &config.tenants {
            if !tenant_config.enabled {
                warn!(tenant = %tenant, "Index tenant disabled, skipping");
                registration.skip();
                continue;
            }

            let config_id = require_field(
                Category::IndexServiceConfig,
                tenant,
                "config_id",
                tenant_config.config_id.as_deref(),
            )?;
            let worker_id = require_field(category, tenant, "worker_id", tenant_config.worker_id.as_deref())?;

            let attributes = self
                .attribute_factory
                .create_attributes(&tenant_config.attributes)?;

            let tenant_definition = ServiceDefinition::new(config_id)
                .with_literal(ARG_TENANT_NAME, tenant)?
                .with_literal(ARG_ATTRIBUTES, &attributes)?
                .with_literal(ARG_SEARCH_ATTRIBUTES, &tenant_config.search_attributes)?
                .with_literal(ARG_FILTER_TYPES, &Vec::<serde_json::Value>::new())?
                .with_literal(ARG_OPTIONS, &tenant_config.config_options)?;
            let config_ref = ServiceId::named(Category::IndexServiceConfig, tenant.as_str());

            let worker = ServiceDefinition::new(worker_id)
                .with_argument(ARG_TENANT_CONFIG, CrossReference::new(config_ref.clone()))
                .with_tag(Tag::new(TAG_INDEX_WORKER).with_attribute(TAG_ATTRIBUTE_TENANT, tenant.as_str()));

            registration.define(config_ref, tenant_definition);
            registration.define(ServiceId::named(category, tenant.as_str()), worker);
        }

        Ok(registration)
    }
}

/// Registers one filter service per enabled tenant with its private filter types
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterServiceRegistrar;

impl CategoryRegistrar for FilterServiceRegistrar {
    type Config = FilterServiceConfig;

    fn category(&self) -> Category {
        Category::FilterService
    }

    fn register(&self, config: &FilterServiceConfig) -> Result<Registration> {
        let category = self.category();
        let mut registration = Registration::new();

        for (tenant, tenant_config) in &config.tenants {
            if !tenant_config.enabled {
                warn!(tenant = %tenant, "Filter service tenant disabled, skipping");
                registration.skip();
                continue;
            }

            let service_id = require_field(category, tenant, "service_id", Some(tenant_config.service_id.as_str()))?;

            let mut filter_types = BTreeMap::new();
            for (name, filter_type) in &tenant_config.filter_types {
                let filter_type_id = require_field(
                    category,
                    tenant,
                    &format!("filter_types.{name}.filter_type_id"),
                    filter_type.filter_type_id.as_deref(),
                )?;
                let template = require_field(
                    category,
                    tenant,
                    &format!("filter_types.{name}.template"),
                    filter_type.template.as_deref(),
                )?;

                let mut definition =
                    ServiceDefinition::new(filter_type_id).with_literal(ARG_TEMPLATE, template)?;
                if !filter_type.options.is_empty() {
                    definition = definition.with_literal(ARG_OPTIONS, &filter_type.options)?;
                }
                filter_types.insert(name.clone(), Argument::inline(definition));
            }

            registration.define(
                ServiceId::named(category, tenant.as_str()),
                ServiceDefinition::new(service_id).with_argument(ARG_FILTER_TYPES, Argument::Map(filter_types)),
            );
        }

        Ok(registration)
    }
}
