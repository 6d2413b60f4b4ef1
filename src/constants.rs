//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default API root when no config file or override is present
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1/orbital/api";

/// Items endpoint, relative to the base URL
pub const ITEMS_PATH: &str = "/items.php";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Amount added to an item's quantity by the Edit command
pub const DEFAULT_QUANTITY_STEP: i64 = 5;

pub const CONFIG_DIR: &str = ".stockroom";
pub const CONFIG_FILE: &str = "config.yaml";
pub const LOG_FILE: &str = "stockroom.log";

pub const ENV_CONFIG_PATH: &str = "STOCKROOM_CONFIG";
pub const ENV_BASE_URL: &str = "STOCKROOM_BASE_URL";
pub const ENV_TOKEN: &str = "STOCKROOM_TOKEN";

/// Application name
pub const APP_NAME: &str = "Stockroom";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
