//! Unit tests for domain error types

use ecf_domain::value_objects::{Category, ServiceId};
use ecf_domain::Error;

#[test]
fn test_missing_field_error() {
    let error = Error::missing_field(Category::PriceSystem, "default", "id");

    assert_eq!(
        error.to_string(),
        "Configuration error: price_system entry \"default\" is missing required field \"id\""
    );
    assert!(error.is_configuration_error());
}

#[test]
fn test_profile_not_found_names_provider_and_profile() {
    let error = Error::profile_not_found("paypal", "sandbox");

    let message = error.to_string();
    assert!(message.contains("\"paypal\""));
    assert!(message.contains("\"sandbox\""));
    match error {
        Error::ProfileNotFound { provider, profile } => {
            assert_eq!(provider, "paypal");
            assert_eq!(profile, "sandbox");
        }
        _ => panic!("Expected ProfileNotFound error"),
    }
}

#[test]
fn test_unresolved_reference_renders_both_ids() {
    let error = Error::unresolved_reference(
        ServiceId::named(Category::CartManager, "b2b"),
        ServiceId::named(Category::OrderManager, "wholesale"),
    );

    assert_eq!(
        error.to_string(),
        "Unresolved reference: ecommerce.cart_manager.b2b depends on ecommerce.order_manager.wholesale, which is not registered"
    );
}

#[test]
fn test_unknown_name_error() {
    let error = Error::unknown_name(Category::CartManager, "nonexistent");

    match &error {
        Error::UnknownName { category, name } => {
            assert_eq!(*category, Category::CartManager);
            assert_eq!(name, "nonexistent");
        }
        _ => panic!("Expected UnknownName error"),
    }
    assert!(error.is_lookup_error());
    assert!(!error.is_configuration_error());
}

#[test]
fn test_construction_error_uses_rendered_id() {
    let error = Error::construction(ServiceId::root(Category::Environment), "session lost");

    match error {
        Error::Construction { service, message } => {
            assert_eq!(service, "ecommerce.environment");
            assert_eq!(message, "session lost");
        }
        _ => panic!("Expected Construction error"),
    }
}

#[test]
fn test_configuration_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ecf.toml");
    let error = Error::configuration_with_source("Failed to read config", io);

    assert!(std::error::Error::source(&error).is_some());
    assert_eq!(error.to_string(), "Configuration error: Failed to read config");
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();

    assert!(matches!(error, Error::Json { .. }));
}
