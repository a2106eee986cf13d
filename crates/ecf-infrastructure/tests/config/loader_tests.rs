//! Configuration loader tests
//!
//! Layering of defaults, TOML files and TOML text, round trips through
//! `save_to_file`, and the load-time checks.

use ecf_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};
use ecf_infrastructure::constants::*;
use tempfile::TempDir;

use crate::test_utils::{SAMPLE_TOML, sample_config};

fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("ECF_LOADER_TESTS")
}

#[test]
fn test_empty_text_yields_defaults() {
    let config = isolated_loader().load_str("").unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.composition.verify_service_types);
    assert_eq!(config.ecommerce.environment.environment_id, DEFAULT_ENVIRONMENT_TYPE);
    assert_eq!(config.ecommerce.index_service.default_tenant, DEFAULT_INDEX_TENANT);
    assert_eq!(
        config.ecommerce.offer_tool.order_storage.parent_folder_path,
        DEFAULT_OFFER_PARENT_FOLDER_PATH
    );
    assert!(config.ecommerce.cart_manager.tenants.is_empty());
    assert!(config.ecommerce.pricing_manager.enabled);
}

#[test]
fn test_sample_is_layered_over_defaults() {
    let config = sample_config();

    let b2b = &config.cart_manager.tenants["b2b"];
    assert_eq!(b2b.order_manager_tenant.as_deref(), Some("store1"));
    assert_eq!(b2b.cart_manager_id, DEFAULT_CART_MANAGER_TYPE);

    let store1 = &config.cart_manager.tenants["store1"];
    assert_eq!(store1.price_calculator.modificators.len(), 1);
    assert_eq!(store1.price_calculator.modificators[0].class, "shipping");

    let paypal = &config.payment_manager.providers["paypal"];
    assert_eq!(paypal.profile.as_deref(), Some("sandbox"));
    assert_eq!(paypal.profiles["sandbox"]["api_user"], "sandbox-user");

    let index = &config.index_service.tenants["default"];
    assert!(index.enabled);
    let attribute_names: Vec<&str> = index.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(attribute_names, vec!["name", "color"]);
    assert_eq!(index.attributes[0].attribute_type.as_deref(), Some("varchar(255)"));
    assert!(!config.index_service.tenants["archived"].enabled);

    assert_eq!(config.tracking_manager.trackers[1].name, "legacy");
    assert!(!config.tracking_manager.trackers[1].enabled);
    assert_eq!(
        config.checkout_manager.by_name["default"].tenants["en"].payment.provider.as_deref(),
        Some("paypal")
    );
}

#[test]
fn test_missing_explicit_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader().with_config_path(dir.path().join("absent.toml"));

    let err = loader.load().unwrap_err();

    assert!(err.is_configuration_error());
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
    let loader = isolated_loader().with_config_path(&path);

    let original = isolated_loader().load_str(SAMPLE_TOML).unwrap();
    loader.save_to_file(&original, &path).unwrap();

    let reloaded = loader.load().unwrap();

    assert_eq!(reloaded, original);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_builder_sections_survive_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("built.toml");
    let built = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
            file_output: None,
        })
        .with_ecommerce(sample_config())
        .build();

    isolated_loader().save_to_file(&built, &path).unwrap();
    let loaded = isolated_loader().with_config_path(&path).load().unwrap();

    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.json_format);
    assert_eq!(loaded.ecommerce, built.ecommerce);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let err = isolated_loader()
        .load_str("[logging]\nlevel = \"loud\"\n")
        .unwrap_err();

    assert!(err.is_configuration_error());
    assert!(err.to_string().contains("loud"));
}

#[test]
fn test_empty_default_tenant_is_rejected() {
    let err = isolated_loader()
        .load_str("[ecommerce.index_service]\ndefault_tenant = \"\"\n")
        .unwrap_err();

    assert!(err.is_configuration_error());
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let err = isolated_loader().load_str("[ecommerce\n").unwrap_err();

    assert!(err.is_configuration_error());
}
