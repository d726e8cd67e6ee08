//! Domain constants
//!
//! Values shared by the invocation engine, the token model and the resource
//! wrappers.

/// Canonical token type accepted by the service.
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Tokens are treated as expired this many seconds before their expiry.
pub const TOKEN_EXPIRY_DELTA_SECS: i64 = 10;

/// Media type sent in both `Content-Type` and `Accept`.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Default API path segment appended to the tenant URL.
pub const DEFAULT_API_PATH: &str = "api";

/// Default overall timeout for the underlying HTTP sender.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Per-resource call deadlines
pub const POLICY_CALL_TIMEOUT_SECS: u64 = 5;
pub const RESOURCE_CALL_TIMEOUT_SECS: u64 = 10;

// Resource paths (relative to the API base URL)
pub const ACCESS_POLICIES_PATH: &str = "/access-policies";
pub const CONNECTOR_SETUP_SCRIPT_PATH: &str = "/connectors/setup-script";
pub const TARGET_SETS_PATH: &str = "/discovery/targetsets";
pub const TARGET_SETS_BULK_PATH: &str = "/discovery/targetsets/bulk";
pub const SETTINGS_PATH: &str = "/settings";
pub const PUBLIC_KEYS_PATH: &str = "/public-keys";
pub const PUBLIC_KEY_SCRIPTS_PATH: &str = "/public-keys/scripts";
