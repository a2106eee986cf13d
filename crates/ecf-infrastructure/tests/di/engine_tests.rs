//! Composition engine tests
//!
//! End-to-end: sample configuration in, locators out, services built
//! on demand by recording fakes.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ecf_domain::constants::*;
use ecf_domain::error::{Error, Result};
use ecf_domain::ports::{Brick, BrickManager};
use ecf_domain::value_objects::{Category, CheckoutKey, ServiceId};
use ecf_infrastructure::config::{
    AppConfig, BrickConfig, CompositionSettings, ConfigBuilder, SystemConfig,
};
use ecf_infrastructure::constants::*;
use ecf_infrastructure::di::{CompositionEngine, ServiceLocators, init_app};
use ecf_infrastructure::infrastructure::{InMemoryBrickManager, NamedBrick};

use crate::test_utils::{
    DEFAULT_TYPE_IDS, RecordingService, SAMPLE_TYPE_IDS, counting_constructors, sample_config,
    sample_constructors,
};

fn compose_sample() -> ServiceLocators {
    CompositionEngine::new(sample_constructors())
        .compose(&sample_config())
        .unwrap()
}

fn recording(service: Arc<dyn ecf_domain::ports::Service>) -> Arc<RecordingService> {
    service.downcast_arc::<RecordingService>().unwrap()
}

// ============================================================================
// Locators
// ============================================================================

#[test]
fn test_locators_expose_configured_names() {
    let locators = compose_sample();

    assert_eq!(locators.names(Category::CartManager), vec!["b2b", "store1"]);
    assert_eq!(locators.names(Category::OrderManager), vec!["de", "en", "store1"]);
    assert_eq!(locators.names(Category::PaymentProvider), vec!["paypal"]);
    assert_eq!(locators.names(Category::IndexService), vec!["default"]);
    assert_eq!(
        locators.names(Category::CheckoutManagerFactory),
        vec!["default.en", "default.store1"]
    );
    assert!(locators.names(Category::TrackingManager).is_empty());
}

#[test]
fn test_unknown_name_is_reported() {
    let locators = compose_sample();

    match locators.cart_managers().get("nonexistent").unwrap_err() {
        Error::UnknownName { category, name } => {
            assert_eq!(category, Category::CartManager);
            assert_eq!(name, "nonexistent");
        }
        _ => panic!("Expected UnknownName error"),
    }
    assert!(!locators.cart_managers().has("nonexistent"));
}

#[test]
fn test_disabled_entries_are_absent() {
    let locators = compose_sample();

    assert!(!locators.index_tenants().has("archived"));
    assert!(!locators.index_configs().has("archived"));
    assert!(!locators.filter_services().has("legacy"));
    assert!(matches!(
        locators.index_tenants().get("archived"),
        Err(Error::UnknownName { .. })
    ));
    assert!(locators.index_tenants().has("default"));
}

#[test]
fn test_cart_and_order_managers_share_instances() {
    let locators = compose_sample();

    let store1_cart = locators
        .cart_managers()
        .get_as::<RecordingService, _>("store1")
        .unwrap();
    let b2b_cart = locators
        .cart_managers()
        .get_as::<RecordingService, _>("b2b")
        .unwrap();
    let store1_orders = locators
        .order_managers()
        .get_as::<RecordingService, _>("store1")
        .unwrap();

    assert!(Arc::ptr_eq(&store1_cart.dependency(ARG_ORDER_MANAGER), &store1_orders));
    assert!(Arc::ptr_eq(&b2b_cart.dependency(ARG_ORDER_MANAGER), &store1_orders));
    assert_eq!(store1_cart.type_id, DEFAULT_CART_MANAGER_TYPE);
}

#[test]
fn test_checkout_is_wired_to_tenant_order_manager() {
    let locators = compose_sample();
    let key = CheckoutKey::new("default", "en");

    let factory = recording(locators.checkout_manager_factories().get(&key).unwrap());
    let processor = recording(locators.commit_order_processors().get(&key).unwrap());
    let en_orders = recording(locators.order_managers().get("en").unwrap());
    let paypal = recording(locators.payment_providers().get("paypal").unwrap());

    assert!(Arc::ptr_eq(&factory.dependency(ARG_ORDER_MANAGER), &en_orders));
    assert!(Arc::ptr_eq(&processor.dependency(ARG_ORDER_MANAGER), &en_orders));
    assert!(Arc::ptr_eq(&factory.dependency(ARG_COMMIT_ORDER_PROCESSOR), &processor));
    assert!(Arc::ptr_eq(&factory.dependency(ARG_PAYMENT_PROVIDER), &paypal));

    let de_key = CheckoutKey::new("default", "de");
    assert!(!locators.checkout_manager_factories().has(&de_key));
}

#[test]
fn test_checkout_order_tenant_override() {
    let mut config = sample_config();
    config
        .checkout_manager
        .by_name
        .get_mut("default")
        .unwrap()
        .tenants
        .get_mut("en")
        .unwrap()
        .order_manager_tenant = Some("de".to_string());
    let locators = CompositionEngine::new(sample_constructors())
        .compose(&config)
        .unwrap();
    let key = CheckoutKey::new("default", "en");

    let factory = recording(locators.checkout_manager_factories().get(&key).unwrap());
    let processor = recording(locators.commit_order_processors().get(&key).unwrap());
    let de_orders = recording(locators.order_managers().get("de").unwrap());
    let en_orders = recording(locators.order_managers().get("en").unwrap());

    assert!(Arc::ptr_eq(&factory.dependency(ARG_ORDER_MANAGER), &de_orders));
    assert!(Arc::ptr_eq(&processor.dependency(ARG_ORDER_MANAGER), &de_orders));
    assert!(!Arc::ptr_eq(&processor.dependency(ARG_ORDER_MANAGER), &en_orders));
}

// ============================================================================
// Laziness and concurrency
// ============================================================================

#[test]
fn test_composition_builds_nothing() {
    let counter = Arc::new(AtomicUsize::new(0));
    let type_ids: Vec<&str> = DEFAULT_TYPE_IDS.iter().chain(SAMPLE_TYPE_IDS).copied().collect();
    let engine = CompositionEngine::new(counting_constructors(&type_ids, Arc::clone(&counter)));

    let locators = engine.compose(&sample_config()).unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    locators.price_systems().get("default").unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_lookups_share_one_instance() {
    let counter = Arc::new(AtomicUsize::new(0));
    let type_ids: Vec<&str> = DEFAULT_TYPE_IDS.iter().chain(SAMPLE_TYPE_IDS).copied().collect();
    let locators = CompositionEngine::new(counting_constructors(&type_ids, Arc::clone(&counter)))
        .compose(&sample_config())
        .unwrap();

    let instances: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let locators = locators.clone();
                scope.spawn(move || locators.payment_providers().get("paypal").unwrap())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|instance| Arc::ptr_eq(instance, &instances[0])));
}

#[test]
fn test_tracking_manager_registers_enabled_trackers() {
    let locators = compose_sample();

    let manager = recording(locators.tracking_manager().unwrap());

    assert_eq!(manager.calls.len(), 1);
    let (method, arguments) = &manager.calls[0];
    assert_eq!(method, METHOD_REGISTER_TRACKER);
    let tracker = recording(Arc::clone(arguments[0].as_service().unwrap()));
    assert_eq!(tracker.type_id, "analytics_tracker");
    assert_eq!(
        tracker.dependency(ARG_TRACKING_ITEM_BUILDER).type_id,
        "tracking_item_builder"
    );
}

// ============================================================================
// Parameters and discovery
// ============================================================================

#[test]
fn test_parameters_are_published() {
    let locators = compose_sample();

    let default_tenant: String = locators.parameter_as(PARAM_INDEX_DEFAULT_TENANT).unwrap();
    let conditions: BTreeMap<String, String> =
        locators.parameter_as(PARAM_PRICING_CONDITION_MAPPING).unwrap();
    let currency = &locators.parameter(PARAM_ENVIRONMENT_OPTIONS).unwrap()["currency"];

    assert_eq!(default_tenant, DEFAULT_INDEX_TENANT);
    assert_eq!(conditions["date_range"], "date_range_condition");
    assert_eq!(currency, "EUR");
    assert!(matches!(
        locators.parameter_as::<String>("unknown.parameter"),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_index_workers_are_discoverable() {
    let locators = compose_sample();

    assert_eq!(
        locators.index_workers(),
        vec![(
            "default".to_string(),
            ServiceId::named(Category::IndexService, "default")
        )]
    );
    let worker = recording(locators.index_tenants().get("default").unwrap());
    let config = recording(locators.index_configs().get("default").unwrap());
    assert!(Arc::ptr_eq(&worker.dependency(ARG_TENANT_CONFIG), &config));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_composition_is_deterministic() {
    let engine = CompositionEngine::new(sample_constructors());
    let config = sample_config();

    let first = engine.define(&config).unwrap();
    let second = engine.define(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_missing_field_aborts_composition() {
    let mut config = sample_config();
    config
        .price_systems
        .insert("erp".to_string(), SystemConfig { id: None });

    match CompositionEngine::new(sample_constructors())
        .compose(&config)
        .unwrap_err()
    {
        Error::MissingField { category, entry, .. } => {
            assert_eq!(category, Category::PriceSystem);
            assert_eq!(entry, "erp");
        }
        _ => panic!("Expected MissingField error"),
    }
}

#[test]
fn test_unregistered_order_tenant_is_an_unresolved_reference() {
    let mut config = sample_config();
    config.cart_manager.tenants.get_mut("b2b").unwrap().order_manager_tenant =
        Some("wholesale".to_string());

    match CompositionEngine::new(sample_constructors())
        .compose(&config)
        .unwrap_err()
    {
        Error::UnresolvedReference { from, to } => {
            assert_eq!(from, ServiceId::named(Category::CartManager, "b2b"));
            assert_eq!(to, ServiceId::named(Category::OrderManager, "wholesale"));
        }
        _ => panic!("Expected UnresolvedReference error"),
    }
}

#[test]
fn test_service_types_are_verified_when_enabled() {
    let engine = CompositionEngine::new(counting_constructors(
        DEFAULT_TYPE_IDS,
        Arc::new(AtomicUsize::new(0)),
    ));
    let config = sample_config();

    // Unverified composition succeeds; the gap surfaces on lookup only
    let locators = engine.compose(&config).unwrap();
    assert!(matches!(
        locators.price_systems().get("default"),
        Err(Error::UnknownServiceType { .. })
    ));

    let err = engine
        .with_settings(CompositionSettings {
            verify_service_types: true,
        })
        .compose(&config)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownServiceType { .. }));
}

// ============================================================================
// Area bricks
// ============================================================================

fn brick_manager() -> Arc<InMemoryBrickManager> {
    let manager = InMemoryBrickManager::new();
    for id in ["teaser", "video"] {
        manager.register(Arc::new(NamedBrick::new(id))).unwrap();
    }
    Arc::new(manager)
}

#[test]
fn test_brick_states_are_applied() {
    let manager = brick_manager();
    let mut config = sample_config();
    config
        .bricks
        .insert("video".to_string(), BrickConfig { enabled: false });

    CompositionEngine::new(sample_constructors())
        .with_brick_manager(manager.clone())
        .compose(&config)
        .unwrap();

    assert!(!manager.is_enabled("video").unwrap());
    assert!(manager.is_enabled("teaser").unwrap());
}

#[test]
fn test_unknown_brick_leaves_states_untouched() {
    let manager = brick_manager();
    let mut config = sample_config();
    config
        .bricks
        .insert("video".to_string(), BrickConfig { enabled: false });
    config
        .bricks
        .insert("carousel".to_string(), BrickConfig { enabled: false });

    let err = CompositionEngine::new(sample_constructors())
        .with_brick_manager(manager.clone())
        .compose(&config)
        .unwrap_err();

    assert!(err.is_configuration_error());
    assert!(err.to_string().contains("carousel"));
    assert!(manager.is_enabled("video").unwrap());
}

/// Brick manager refusing to disable one brick
struct StuckBrickManager {
    inner: InMemoryBrickManager,
    stuck: &'static str,
}

impl BrickManager for StuckBrickManager {
    fn register(&self, brick: Arc<dyn Brick>) -> Result<()> {
        self.inner.register(brick)
    }

    fn brick(&self, id: &str) -> Result<Arc<dyn Brick>> {
        self.inner.brick(id)
    }

    fn bricks(&self) -> Vec<Arc<dyn Brick>> {
        self.inner.bricks()
    }

    fn enable(&self, id: &str) -> Result<()> {
        self.inner.enable(id)
    }

    fn disable(&self, id: &str) -> Result<()> {
        if id == self.stuck {
            return Err(Error::internal(format!("brick \"{id}\" is locked")));
        }
        self.inner.disable(id)
    }

    fn is_enabled(&self, id: &str) -> Result<bool> {
        self.inner.is_enabled(id)
    }
}

#[test]
fn test_failed_brick_change_restores_previous_states() {
    let inner = InMemoryBrickManager::new();
    for id in ["teaser", "video"] {
        inner.register(Arc::new(NamedBrick::new(id))).unwrap();
    }
    let manager = Arc::new(StuckBrickManager {
        inner,
        stuck: "video",
    });
    let mut config = sample_config();
    for id in ["teaser", "video"] {
        config
            .bricks
            .insert(id.to_string(), BrickConfig { enabled: false });
    }

    let err = CompositionEngine::new(sample_constructors())
        .with_brick_manager(manager.clone())
        .compose(&config)
        .unwrap_err();

    assert!(matches!(err, Error::Internal { .. }));
    assert!(manager.is_enabled("teaser").unwrap());
    assert!(manager.is_enabled("video").unwrap());
}

// ============================================================================
// Bootstrap
// ============================================================================

#[test]
fn test_init_app_applies_composition_settings() {
    let config: AppConfig = ConfigBuilder::new()
        .with_composition(CompositionSettings {
            verify_service_types: true,
        })
        .with_ecommerce(sample_config())
        .build();
    let engine = CompositionEngine::new(counting_constructors(
        DEFAULT_TYPE_IDS,
        Arc::new(AtomicUsize::new(0)),
    ));

    assert!(matches!(
        init_app(config.clone(), engine),
        Err(Error::UnknownServiceType { .. })
    ));

    let context = init_app(config, CompositionEngine::new(sample_constructors())).unwrap();
    assert!(context.locators().cart_managers().has("store1"));
    assert!(context.config.composition.verify_service_types);
}
