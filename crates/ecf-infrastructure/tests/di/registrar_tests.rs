//! Category registrar tests
//!
//! Registrars are exercised one at a time against slices of the sample
//! configuration; nothing here builds a service.

use std::sync::Arc;

use ecf_domain::constants::*;
use ecf_domain::definition::{Argument, CrossReference};
use ecf_domain::error::Error;
use ecf_domain::value_objects::{Category, CheckoutKey, ServiceId};
use ecf_infrastructure::config::{
    CheckoutStepConfig, ConfigLoader, FilterTypeConfig, PaymentProviderConfig, PricingManagerConfig,
    SystemConfig, TrackerConfig,
};
use ecf_infrastructure::di::registrars::*;
use ecf_infrastructure::infrastructure::DefaultAttributeFactory;

use crate::test_utils::sample_config;

fn reference_to(argument: Option<&Argument>) -> ServiceId {
    match argument {
        Some(Argument::Reference(reference)) => reference.target().clone(),
        other => panic!("Expected reference argument, got {other:?}"),
    }
}

// ============================================================================
// Cart and order managers
// ============================================================================

#[test]
fn test_cart_manager_defaults_to_own_order_tenant() {
    let registration = CartManagerRegistrar.register(&sample_config().cart_manager).unwrap();

    let store1 = registration
        .get(&ServiceId::named(Category::CartManager, "store1"))
        .unwrap();
    assert_eq!(
        reference_to(store1.argument(ARG_ORDER_MANAGER)),
        ServiceId::named(Category::OrderManager, "store1")
    );
    assert!(matches!(store1.argument(ARG_CART_FACTORY), Some(Argument::Inline(_))));
    assert!(matches!(
        store1.argument(ARG_PRICE_CALCULATOR_FACTORY),
        Some(Argument::Inline(_))
    ));
}

#[test]
fn test_cart_manager_follows_explicit_order_tenant() {
    let registration = CartManagerRegistrar.register(&sample_config().cart_manager).unwrap();

    let b2b = registration
        .get(&ServiceId::named(Category::CartManager, "b2b"))
        .unwrap();
    assert_eq!(
        reference_to(b2b.argument(ARG_ORDER_MANAGER)),
        ServiceId::named(Category::OrderManager, "store1")
    );
}

#[test]
fn test_order_manager_requires_agent_factory() {
    let mut config = sample_config().order_manager;
    config.tenants.get_mut("de").unwrap().order_agent.factory_id = String::new();

    match OrderManagerRegistrar.register(&config).unwrap_err() {
        Error::MissingField { category, entry, field } => {
            assert_eq!(category, Category::OrderManager);
            assert_eq!(entry, "de");
            assert_eq!(field, "order_agent.factory_id");
        }
        _ => panic!("Expected MissingField error"),
    }
}

// ============================================================================
// Pricing and systems
// ============================================================================

#[test]
fn test_pricing_manager_publishes_mappings() {
    let mut config = PricingManagerConfig {
        enabled: false,
        ..Default::default()
    };
    config
        .actions
        .insert("discount".to_string(), "product_discount".to_string());

    let registration = PricingManagerRegistrar.register(&config).unwrap();
    let parameters: Vec<&str> = registration
        .parameters()
        .iter()
        .map(|(key, _)| key.as_str())
        .collect();

    assert_eq!(
        parameters,
        vec![
            PARAM_PRICING_ENABLED,
            PARAM_PRICING_CONDITION_MAPPING,
            PARAM_PRICING_ACTION_MAPPING,
            PARAM_PRICING_OPTIONS,
        ]
    );
    assert_eq!(registration.parameters()[0].1, serde_json::json!(false));
    assert_eq!(
        registration.parameters()[2].1,
        serde_json::json!({"discount": "product_discount"})
    );
}

#[test]
fn test_system_without_id_is_rejected() {
    let mut systems = sample_config().availability_systems;
    systems.insert("legacy".to_string(), SystemConfig { id: None });

    match SystemRegistrar::availability_systems()
        .register(&systems)
        .unwrap_err()
    {
        Error::MissingField { category, entry, field } => {
            assert_eq!(category, Category::AvailabilitySystem);
            assert_eq!(entry, "legacy");
            assert_eq!(field, "id");
        }
        _ => panic!("Expected MissingField error"),
    }
}

#[test]
fn test_system_registrar_only_accepts_system_categories() {
    assert!(SystemRegistrar::new(Category::PriceSystem).is_ok());
    assert!(matches!(
        SystemRegistrar::new(Category::CartManager),
        Err(Error::InvalidArgument { .. })
    ));
}

// ============================================================================
// Checkout and payment
// ============================================================================

#[test]
fn test_checkout_factory_shares_registered_processor() {
    let registration = CheckoutManagerRegistrar
        .register(&sample_config().checkout_manager)
        .unwrap();
    let key = CheckoutKey::new("default", "en");

    let processor_id = ServiceId::checkout(Category::CommitOrderProcessor, key.clone());
    let processor = registration.get(&processor_id).unwrap();
    let factory = registration
        .get(&ServiceId::checkout(Category::CheckoutManagerFactory, key))
        .unwrap();

    assert_eq!(reference_to(factory.argument(ARG_COMMIT_ORDER_PROCESSOR)), processor_id);
    assert_eq!(
        reference_to(processor.argument(ARG_ORDER_MANAGER)),
        ServiceId::named(Category::OrderManager, "en")
    );
    assert_eq!(
        factory.argument(ARG_PAYMENT_PROVIDER),
        Some(&Argument::Reference(CrossReference::to(
            Category::PaymentProvider,
            "paypal"
        )))
    );
    match factory.argument(ARG_CHECKOUT_STEP_DEFINITIONS) {
        Some(Argument::Literal(steps)) => {
            assert_eq!(steps[0]["name"], "delivery_address");
            assert_eq!(steps[0]["class"], "delivery_address_step");
            assert_eq!(steps[1]["name"], "confirm");
        }
        other => panic!("Expected literal step definitions, got {other:?}"),
    }
}

#[test]
fn test_checkout_without_provider_has_no_payment_argument() {
    let registration = CheckoutManagerRegistrar
        .register(&sample_config().checkout_manager)
        .unwrap();

    let factory = registration
        .get(&ServiceId::checkout(
            Category::CheckoutManagerFactory,
            CheckoutKey::new("default", "store1"),
        ))
        .unwrap();

    assert!(factory.argument(ARG_PAYMENT_PROVIDER).is_none());
}

#[test]
fn test_undefined_payment_profile_is_rejected() {
    let mut config = sample_config().payment_manager;
    config.providers.get_mut("paypal").unwrap().profile = Some("live".to_string());

    let err = PaymentManagerRegistrar.register(&config).unwrap_err();

    match &err {
        Error::ProfileNotFound { provider, profile } => {
            assert_eq!(provider, "paypal");
            assert_eq!(profile, "live");
        }
        _ => panic!("Expected ProfileNotFound error"),
    }
    let message = err.to_string();
    assert!(message.contains("paypal"));
    assert!(message.contains("live"));
}

#[test]
fn test_profile_is_checked_before_provider_id() {
    let mut config = sample_config().payment_manager;
    config.providers.insert(
        "datatrans".to_string(),
        PaymentProviderConfig {
            provider_id: None,
            profile: Some("test".to_string()),
            ..Default::default()
        },
    );

    assert!(matches!(
        PaymentManagerRegistrar.register(&config),
        Err(Error::ProfileNotFound { .. })
    ));
}

#[test]
fn test_provider_receives_profile_options() {
    let registration = PaymentManagerRegistrar
        .register(&sample_config().payment_manager)
        .unwrap();

    let paypal = registration
        .get(&ServiceId::named(Category::PaymentProvider, "paypal"))
        .unwrap();

    assert_eq!(paypal.type_id(), "paypal_provider");
    assert_eq!(
        paypal.argument(ARG_OPTIONS),
        Some(&Argument::Literal(serde_json::json!({"api_user": "sandbox-user"})))
    );
}

// ============================================================================
// Index and filter services
// ============================================================================

#[test]
fn test_disabled_index_tenant_is_skipped() {
    let registrar = IndexServiceRegistrar::new(Arc::new(DefaultAttributeFactory));

    let registration = registrar.register(&sample_config().index_service).unwrap();

    assert_eq!(registration.skipped(), 1);
    assert!(registration
        .get(&ServiceId::named(Category::IndexService, "archived"))
        .is_none());
    assert!(registration
        .get(&ServiceId::named(Category::IndexServiceConfig, "archived"))
        .is_none());
}

#[test]
fn test_index_worker_is_tagged_and_references_its_config() {
    let registrar = IndexServiceRegistrar::new(Arc::new(DefaultAttributeFactory));
    let registration = registrar.register(&sample_config().index_service).unwrap();

    let worker = registration
        .get(&ServiceId::named(Category::IndexService, "default"))
        .unwrap();
    let tag = worker.tag(TAG_INDEX_WORKER).unwrap();
    assert_eq!(tag.attribute(TAG_ATTRIBUTE_TENANT), Some("default"));
    assert_eq!(
        reference_to(worker.argument(ARG_TENANT_CONFIG)),
        ServiceId::named(Category::IndexServiceConfig, "default")
    );

    let config = registration
        .get(&ServiceId::named(Category::IndexServiceConfig, "default"))
        .unwrap();
    match config.argument(ARG_ATTRIBUTES) {
        Some(Argument::Literal(attributes)) => {
            assert_eq!(attributes[0]["name"], "name");
            assert_eq!(attributes[0]["field_name"], "name");
            assert_eq!(attributes[1]["name"], "color");
        }
        other => panic!("Expected literal attributes, got {other:?}"),
    }
}

#[test]
fn test_filter_type_requires_template() {
    let mut config = sample_config().filter_service;
    config
        .tenants
        .get_mut("default")
        .unwrap()
        .filter_types
        .insert(
            "range".to_string(),
            FilterTypeConfig {
                filter_type_id: Some("range_filter".to_string()),
                ..Default::default()
            },
        );

    match FilterServiceRegistrar.register(&config).unwrap_err() {
        Error::MissingField { entry, field, .. } => {
            assert_eq!(entry, "default");
            assert_eq!(field, "filter_types.range.template");
        }
        _ => panic!("Expected MissingField error"),
    }
}

#[test]
fn test_filter_types_are_private_to_their_service() {
    let registration = FilterServiceRegistrar
        .register(&sample_config().filter_service)
        .unwrap();

    assert_eq!(registration.len(), 1);
    assert_eq!(registration.skipped(), 1);
    let service = registration
        .get(&ServiceId::named(Category::FilterService, "default"))
        .unwrap();
    match service.argument(ARG_FILTER_TYPES) {
        Some(Argument::Map(types)) => {
            assert!(matches!(types.get("select"), Some(Argument::Inline(definition)) if definition.type_id() == "select_filter"));
        }
        other => panic!("Expected filter type map, got {other:?}"),
    }
}

// ============================================================================
// Marketing
// ============================================================================

#[test]
fn test_tracking_manager_records_enabled_trackers_only() {
    let registration = TrackingManagerRegistrar
        .register(&sample_config().tracking_manager)
        .unwrap();

    let manager = registration
        .get(&ServiceId::root(Category::TrackingManager))
        .unwrap();

    assert_eq!(registration.skipped(), 1);
    assert_eq!(manager.method_calls().len(), 1);
    let call = &manager.method_calls()[0];
    assert_eq!(call.method, METHOD_REGISTER_TRACKER);
    match call.arguments.as_slice() {
        [Argument::Inline(tracker)] => {
            assert_eq!(tracker.type_id(), "analytics_tracker");
            assert!(matches!(
                tracker.argument(ARG_TRACKING_ITEM_BUILDER),
                Some(Argument::Inline(builder)) if builder.type_id() == "tracking_item_builder"
            ));
        }
        other => panic!("Expected one inline tracker, got {other:?}"),
    }
}

#[test]
fn test_enabled_tracker_requires_id() {
    let mut config = sample_config().tracking_manager;
    config.trackers.push(TrackerConfig {
        name: "ecommerce".to_string(),
        ..TrackerConfig::default()
    });

    assert!(matches!(
        TrackingManagerRegistrar.register(&config),
        Err(Error::MissingField { .. })
    ));
}

#[test]
fn test_voucher_service_publishes_token_mapping() {
    let registration = VoucherServiceRegistrar
        .register(&sample_config().voucher_service)
        .unwrap();

    assert!(registration.get(&ServiceId::root(Category::VoucherService)).is_some());
    assert!(registration
        .get(&ServiceId::root(Category::TokenManagerFactory))
        .is_some());
    assert_eq!(
        registration.parameters(),
        &[(
            PARAM_TOKEN_MANAGER_MAPPING.to_string(),
            serde_json::json!({"single": "single_token_manager"})
        )]
    );
}

#[test]
fn test_offer_tool_publishes_storage_parameters() {
    let registration = OfferToolRegistrar
        .register(&sample_config().offer_tool)
        .unwrap();

    let keys: Vec<&str> = registration
        .parameters()
        .iter()
        .map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            PARAM_OFFER_CLASS,
            PARAM_OFFER_ITEM_CLASS,
            PARAM_OFFER_PARENT_FOLDER_PATH
        ]
    );
}

// ============================================================================
// Configured order
// ============================================================================

const UNSORTED_TOML: &str = r#"
[[ecommerce.checkout_manager.by_name.default.tenants.en.steps]]
name = "deliveryaddress"
class = "delivery_address_step"

[[ecommerce.checkout_manager.by_name.default.tenants.en.steps]]
name = "confirm"
class = "confirm_step"

[ecommerce.index_service.tenants.default]
config_id = "mysql_config"
worker_id = "mysql_worker"

[[ecommerce.index_service.tenants.default.attributes]]
name = "zeta_price"

[[ecommerce.index_service.tenants.default.attributes]]
name = "alpha_name"

[[ecommerce.tracking_manager.trackers]]
name = "zeta"
id = "zeta_tracker"

[[ecommerce.tracking_manager.trackers]]
name = "alpha"
id = "alpha_tracker"
"#;

#[test]
fn test_checkout_steps_keep_configured_order() {
    let config = ConfigLoader::new().load_str(UNSORTED_TOML).unwrap().ecommerce;
    let registration = CheckoutManagerRegistrar.register(&config.checkout_manager).unwrap();

    let factory = registration
        .get(&ServiceId::checkout(
            Category::CheckoutManagerFactory,
            CheckoutKey::new("default", "en"),
        ))
        .unwrap();

    match factory.argument(ARG_CHECKOUT_STEP_DEFINITIONS) {
        Some(Argument::Literal(steps)) => {
            let names: Vec<&str> = steps
                .as_array()
                .unwrap()
                .iter()
                .map(|step| step["name"].as_str().unwrap())
                .collect();
            assert_eq!(names, vec!["deliveryaddress", "confirm"]);
        }
        other => panic!("Expected literal step definitions, got {other:?}"),
    }
}

#[test]
fn test_trackers_register_in_configured_order() {
    let config = ConfigLoader::new().load_str(UNSORTED_TOML).unwrap().ecommerce;
    let registration = TrackingManagerRegistrar.register(&config.tracking_manager).unwrap();

    let manager = registration
        .get(&ServiceId::root(Category::TrackingManager))
        .unwrap();
    let trackers: Vec<&str> = manager
        .method_calls()
        .iter()
        .map(|call| match call.arguments.as_slice() {
            [Argument::Inline(tracker)] => tracker.type_id(),
            other => panic!("Expected one inline tracker, got {other:?}"),
        })
        .collect();

    assert_eq!(trackers, vec!["zeta_tracker", "alpha_tracker"]);
}

#[test]
fn test_index_attributes_keep_configured_order() {
    let config = ConfigLoader::new().load_str(UNSORTED_TOML).unwrap().ecommerce;
    let registrar = IndexServiceRegistrar::new(Arc::new(DefaultAttributeFactory));
    let registration = registrar.register(&config.index_service).unwrap();

    let tenant = registration
        .get(&ServiceId::named(Category::IndexServiceConfig, "default"))
        .unwrap();
    match tenant.argument(ARG_ATTRIBUTES) {
        Some(Argument::Literal(attributes)) => {
            assert_eq!(attributes[0]["name"], "zeta_price");
            assert_eq!(attributes[1]["name"], "alpha_name");
        }
        other => panic!("Expected literal attributes, got {other:?}"),
    }
}

#[test]
fn test_checkout_step_requires_name() {
    let mut config = sample_config().checkout_manager;
    config
        .by_name
        .get_mut("default")
        .unwrap()
        .tenants
        .get_mut("en")
        .unwrap()
        .steps
        .push(CheckoutStepConfig::default());

    match CheckoutManagerRegistrar.register(&config).unwrap_err() {
        Error::MissingField { entry, field, .. } => {
            assert_eq!(entry, "default.en");
            assert_eq!(field, "steps[2].name");
        }
        other => panic!("Expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_tracker_requires_name() {
    let mut config = sample_config().tracking_manager;
    config.trackers.push(TrackerConfig {
        id: Some("unnamed_tracker".to_string()),
        ..TrackerConfig::default()
    });

    match TrackingManagerRegistrar.register(&config).unwrap_err() {
        Error::MissingField { entry, field, .. } => {
            assert_eq!(entry, "trackers[2]");
            assert_eq!(field, "name");
        }
        other => panic!("Expected MissingField, got {other:?}"),
    }
}
