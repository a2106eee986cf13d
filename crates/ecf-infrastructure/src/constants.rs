//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Names shared with constructors (argument names, parameter keys, tags)
//! are defined in `ecf_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ecf.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ecf";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ECF";

/// Separator of nested keys in environment variables (e.g. `ECF_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ECF_LOG";

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "ecf";

// ============================================================================
// DEFAULT IMPLEMENTATION IDS
// ============================================================================

/// Default environment implementation
pub const DEFAULT_ENVIRONMENT_TYPE: &str = "session_environment";

/// Default cart manager implementation
pub const DEFAULT_CART_MANAGER_TYPE: &str = "multi_cart_manager";

/// Default cart factory implementation
pub const DEFAULT_CART_FACTORY_TYPE: &str = "cart_factory";

/// Default cart price calculator factory implementation
pub const DEFAULT_PRICE_CALCULATOR_FACTORY_TYPE: &str = "cart_price_calculator_factory";

/// Default order manager implementation
pub const DEFAULT_ORDER_MANAGER_TYPE: &str = "order_manager";

/// Default order agent factory implementation
pub const DEFAULT_ORDER_AGENT_FACTORY_TYPE: &str = "order_agent_factory";

/// Default pricing manager implementation
pub const DEFAULT_PRICING_MANAGER_TYPE: &str = "pricing_manager";

/// Default checkout manager factory implementation
pub const DEFAULT_CHECKOUT_MANAGER_FACTORY_TYPE: &str = "checkout_manager_factory";

/// Default commit order processor implementation
pub const DEFAULT_COMMIT_ORDER_PROCESSOR_TYPE: &str = "commit_order_processor";

/// Default payment manager implementation
pub const DEFAULT_PAYMENT_MANAGER_TYPE: &str = "payment_manager";

/// Default index service implementation
pub const DEFAULT_INDEX_SERVICE_TYPE: &str = "index_service";

/// Default index service tenant
pub const DEFAULT_INDEX_TENANT: &str = "default";

/// Default filter service implementation
pub const DEFAULT_FILTER_SERVICE_TYPE: &str = "filter_service";

/// Default voucher service implementation
pub const DEFAULT_VOUCHER_SERVICE_TYPE: &str = "voucher_service";

/// Default voucher token manager factory implementation
pub const DEFAULT_TOKEN_MANAGER_FACTORY_TYPE: &str = "token_manager_factory";

/// Default offer tool implementation
pub const DEFAULT_OFFER_TOOL_TYPE: &str = "offer_tool";

/// Default offer class of the offer tool storage
pub const DEFAULT_OFFER_CLASS: &str = "OfferToolOffer";

/// Default offer item class of the offer tool storage
pub const DEFAULT_OFFER_ITEM_CLASS: &str = "OfferToolOfferItem";

/// Default parent folder of stored offers
pub const DEFAULT_OFFER_PARENT_FOLDER_PATH: &str = "/offertool/offers/%Y/%m";

/// Default tracking manager implementation
pub const DEFAULT_TRACKING_MANAGER_TYPE: &str = "tracking_manager";
