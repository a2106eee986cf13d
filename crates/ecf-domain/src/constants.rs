//! Domain layer constants
//!
//! Names that are part of the published contract of the composition engine:
//! the service id prefix, tag names and the keys of published parameters.
//! Infrastructure-specific constants (default implementation ids, config
//! file names) live in `ecf_infrastructure::constants`.

// ============================================================================
// SERVICE IDENTITY CONSTANTS
// ============================================================================

/// Prefix of every rendered service id
pub const SERVICE_ID_PREFIX: &str = "ecommerce";

/// Separator between the segments of a rendered service id
pub const SERVICE_ID_SEPARATOR: char = '.';

// ============================================================================
// TAG CONSTANTS
// ============================================================================

/// Tag attached to every index worker definition
pub const TAG_INDEX_WORKER: &str = "index_service.worker";

/// Attribute of [`TAG_INDEX_WORKER`] carrying the owning tenant
pub const TAG_ATTRIBUTE_TENANT: &str = "tenant";

// ============================================================================
// CONSTRUCTOR ARGUMENT NAMES
// ============================================================================

/// Opaque options bundle
pub const ARG_OPTIONS: &str = "options";

/// Cart factory of a cart manager
pub const ARG_CART_FACTORY: &str = "cart_factory";

/// Price calculator factory of a cart manager
pub const ARG_PRICE_CALCULATOR_FACTORY: &str = "price_calculator_factory";

/// Price modificator configuration of a price calculator factory
pub const ARG_MODIFICATOR_CONFIG: &str = "modificator_config";

/// Order manager dependency (cart manager, checkout services)
pub const ARG_ORDER_MANAGER: &str = "order_manager";

/// Order agent factory of an order manager
pub const ARG_ORDER_AGENT_FACTORY: &str = "order_agent_factory";

/// Commit order processor of a checkout manager factory
pub const ARG_COMMIT_ORDER_PROCESSOR: &str = "commit_order_processor";

/// Checkout step definitions of a checkout manager factory
pub const ARG_CHECKOUT_STEP_DEFINITIONS: &str = "checkout_step_definitions";

/// Payment provider of a checkout manager factory
pub const ARG_PAYMENT_PROVIDER: &str = "payment_provider";

/// Tenant name of an index configuration
pub const ARG_TENANT_NAME: &str = "tenant_name";

/// Attribute list of an index configuration
pub const ARG_ATTRIBUTES: &str = "attributes";

/// Search attribute list of an index configuration
pub const ARG_SEARCH_ATTRIBUTES: &str = "search_attributes";

/// Filter types of an index configuration or filter service
pub const ARG_FILTER_TYPES: &str = "filter_types";

/// Tenant configuration of an index worker
pub const ARG_TENANT_CONFIG: &str = "tenant_config";

/// Template of a filter type
pub const ARG_TEMPLATE: &str = "template";

/// Item builder of a tracker
pub const ARG_TRACKING_ITEM_BUILDER: &str = "tracking_item_builder";

// ============================================================================
// METHOD CALL CONSTANTS
// ============================================================================

/// Method recorded against the tracking manager once per enabled tracker
pub const METHOD_REGISTER_TRACKER: &str = "register_tracker";

// ============================================================================
// PUBLISHED PARAMETER KEYS
// ============================================================================

/// Environment options bundle
pub const PARAM_ENVIRONMENT_OPTIONS: &str = "environment.options";

/// Whether the pricing manager is enabled
pub const PARAM_PRICING_ENABLED: &str = "pricing_manager.enabled";

/// Pricing rule condition name to implementation id mapping
pub const PARAM_PRICING_CONDITION_MAPPING: &str = "pricing_manager.condition_mapping";

/// Pricing rule action name to implementation id mapping
pub const PARAM_PRICING_ACTION_MAPPING: &str = "pricing_manager.action_mapping";

/// Pricing manager options bundle
pub const PARAM_PRICING_OPTIONS: &str = "pricing_manager.options";

/// Default index service tenant
pub const PARAM_INDEX_DEFAULT_TENANT: &str = "index_service.default_tenant";

/// Voucher token manager name to implementation id mapping
pub const PARAM_TOKEN_MANAGER_MAPPING: &str = "voucher_service.token_manager.mapping";

/// Offer class used by the offer tool order storage
pub const PARAM_OFFER_CLASS: &str = "offer_tool.order_storage.offer_class";

/// Offer item class used by the offer tool order storage
pub const PARAM_OFFER_ITEM_CLASS: &str = "offer_tool.order_storage.offer_item_class";

/// Parent folder of stored offers
pub const PARAM_OFFER_PARENT_FOLDER_PATH: &str = "offer_tool.order_storage.parent_folder_path";
