//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DPA_TENANT_URL`: Tenant URL (required)
//! - `DPA_API_PATH`: API path segment (default `api`)
//! - `DPA_VERBOSE`: Dump requests and responses (true/false)
//! - `DPA_REQUEST_TIMEOUT_SECS`: Overall sender timeout in seconds
//! - `DPA_CLIENT_ID`, `DPA_CLIENT_SECRET`, `DPA_IDENTITY_URL`: OAuth client
//!   credentials (all three or none)
//! - `DPA_CLIENT_APP_ID`: OAuth application id (platform token when unset)
//! - `DPA_SCOPES`: Comma-separated scopes
//! - `DPA_LOG_FILTER`: Default tracing filter directive
//! - `DPA_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./dpa.json` or `./dpa.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use dpa_domain::{CredentialsConfig, DpaConfig, LoggingConfig, ServiceConfig};

use crate::api::ApiError;

type Result<T> = std::result::Result<T, ApiError>;

const CONFIG_FILE_NAMES: [&str; 4] = ["dpa.json", "dpa.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ApiError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<DpaConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ApiError::Config` if `DPA_TENANT_URL` is missing, a numeric
/// variable does not parse, or the client credentials are incomplete.
pub fn load_from_env() -> Result<DpaConfig> {
    let mut service = ServiceConfig::new(env_var("DPA_TENANT_URL")?);
    if let Some(api_path) = env_opt("DPA_API_PATH") {
        service.api_path = api_path;
    }
    service.verbose = env_bool("DPA_VERBOSE", false);
    if let Some(timeout) = env_opt("DPA_REQUEST_TIMEOUT_SECS") {
        service.request_timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| ApiError::Config(format!("Invalid request timeout: {}", e)))?;
    }

    let credentials = match env_opt("DPA_CLIENT_ID") {
        Some(client_id) => Some(CredentialsConfig {
            client_id,
            client_secret: env_var("DPA_CLIENT_SECRET")?,
            client_app_id: env_opt("DPA_CLIENT_APP_ID"),
            identity_url: env_var("DPA_IDENTITY_URL")?,
            scopes: env_opt("DPA_SCOPES").map(|s| split_list(&s)).unwrap_or_default(),
        }),
        None => None,
    };

    let mut logging = LoggingConfig::default();
    if let Some(filter) = env_opt("DPA_LOG_FILTER") {
        logging.filter = filter;
    }
    logging.json = env_bool("DPA_LOG_JSON", false);

    Ok(DpaConfig { service, credentials, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ApiError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<DpaConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApiError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApiError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<DpaConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ApiError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ApiError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Get optional environment variable, treating empty as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
