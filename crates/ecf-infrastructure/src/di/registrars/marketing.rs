use ecf_domain::constants::*;
use ecf_domain::definition::{Argument, ServiceDefinition};
use ecf_domain::error::Result;
use ecf_domain::value_objects::{Category, ServiceId};
use tracing::{debug, warn};

use super::CategoryRegistrar;
use crate::config::{OfferToolConfig, TrackingManagerConfig, VoucherServiceConfig};
use crate::di::definitions::Registration;
use crate::di::validation::require_field;

/// Registers the voucher service, its token manager factory alias and
/// publishes the token manager mapping
#[derive(Debug, Default, Clone, Copy)]
pub struct VoucherServiceRegistrar;

impl CategoryRegistrar for VoucherServiceRegistrar {
    type Config = VoucherServiceConfig;

    fn category(&self) -> Category {
        Category::VoucherService
    }

    fn register(&self, config: &VoucherServiceConfig) -> Result<Registration> {
        let category = self.category();
        let voucher_service_id = require_field(
            category,
            category.as_str(),
            "voucher_service_id",
            Some(config.voucher_service_id.as_str()),
        )?;
        let factory_id = require_field(
            Category::TokenManagerFactory,
            Category::TokenManagerFactory.as_str(),
            "token_managers.factory_id",
            Some(config.token_managers.factory_id.as_str()),
        )?;

        let mut registration = Registration::new();
        registration.define(
            ServiceId::root(category),
            ServiceDefinition::new(voucher_service_id)
                .with_literal(ARG_OPTIONS, &config.voucher_service_options)?,
        );
        registration.define(
            ServiceId::root(Category::TokenManagerFactory),
            ServiceDefinition::alias(factory_id),
        );
        registration.set_parameter(PARAM_TOKEN_MANAGER_MAPPING, &config.token_managers.mapping)?;
        Ok(registration)
    }
}

/// Registers the offer tool alias and publishes its storage settings
#[derive(Debug, Default, Clone, Copy)]
pub struct OfferToolRegistrar;

impl CategoryRegistrar for OfferToolRegistrar {
    type Config = OfferToolConfig;

    fn category(&self) -> Category {
        Category::OfferTool
    }

    fn register(&self, config: &OfferToolConfig) -> Result<Registration> {
        let category = self.category();
        let service_id = require_field(
            category,
            category.as_str(),
            "service_id",
            Some(config.service_id.as_str()),
        )?;

        let storage = &config.order_storage;
        let mut registration = Registration::new();
        registration.define(ServiceId::root(category), ServiceDefinition::alias(service_id));
        registration.set_parameter(PARAM_OFFER_CLASS, &storage.offer_class)?;
        registration.set_parameter(PARAM_OFFER_ITEM_CLASS, &storage.offer_item_class)?;
        registration.set_parameter(PARAM_OFFER_PARENT_FOLDER_PATH, &storage.parent_folder_path)?;
        Ok(registration)
    }
}

/// Registers the tracking manager with one `register_tracker` call per
/// enabled tracker
///
/// Trackers are inline definitions; they are built when the tracking
/// manager is, and are not addressable on their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingManagerRegistrar;

impl CategoryRegistrar for TrackingManagerRegistrar {
    type Config = TrackingManagerConfig;

    fn category(&self) -> Category {
        Category::TrackingManager
    }

    fn register(&self, config: &TrackingManagerConfig) -> Result<Registration> {
        let category = self.category();
        let tracking_manager_id = require_field(
            category,
            category.as_str(),
            "tracking_manager_id",
            Some(config.tracking_manager_id.as_str()),
        )?;

        let mut registration = Registration::new();
        let mut tracking_manager = ServiceDefinition::new(tracking_manager_id);

        for (index, tracker_config) in config.trackers.iter().enumerate() {
            let name = require_field(
                category,
                &format!("trackers[{index}]"),
                "name",
                Some(tracker_config.name.as_str()),
            )?;
            if !tracker_config.enabled {
                warn!(tracker = %name, "Tracker disabled, skipping");
                registration.skip();
                continue;
            }

            let tracker_id = require_field(category, name, "id", tracker_config.id.as_deref())?;
            let mut tracker = ServiceDefinition::new(tracker_id);
            if let Some(item_builder_id) = &tracker_config.item_builder_id {
                tracker.set_argument(
                    ARG_TRACKING_ITEM_BUILDER,
                    ServiceDefinition::alias(item_builder_id.as_str()),
                );
            }
            if let Some(options) = &tracker_config.options {
                tracker.set_argument(ARG_OPTIONS, Argument::literal(options)?);
            }

            debug!(tracker = %name, type_id = tracker_id, "Tracker registered");
            tracking_manager.add_method_call(METHOD_REGISTER_TRACKER, vec![Argument::inline(tracker)]);
        }

        registration.define(ServiceId::root(category), tracking_manager);
        Ok(registration)
    }
}
