//! # Client Configuration
//!
//! Where the backend lives, which paths it serves, and where the session
//! marker is kept.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BARISTA_API_URL=http://10.0.0.5:3000                               │
//! │     BARISTA_AUTH_PATH=/user                                            │
//! │     BARISTA_SESSION_FILE=/tmp/session.json                             │
//! │     BARISTA_CURRENCY=LKR                                               │
//! │     BARISTA_TIMEOUT_SECS=10                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/barista-shop/dashboard.toml (Linux)                      │
//! │     ~/Library/Application Support/com.barista.shop/dashboard.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, 30 s timeout, session key "user"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dashboard.toml
//! [api]
//! base_url = "http://localhost:3000"
//! timeout_secs = 30
//!
//! [endpoints]
//! customers = "/customers"
//! items = "/items"
//! orders = "/orders"
//! auth = "/users"
//!
//! [session]
//! key = "user"
//!
//! [display]
//! currency = "LKR"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

// =============================================================================
// API Settings
// =============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Resource paths, relative to the base URL.
///
/// Some deployments mount the auth routes under `/user` instead of `/users`,
/// hence the override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_customers")]
    pub customers: String,

    #[serde(default = "default_items")]
    pub items: String,

    #[serde(default = "default_orders")]
    pub orders: String,

    /// Parent of `/login` and `/register`.
    #[serde(default = "default_auth")]
    pub auth: String,
}

fn default_customers() -> String {
    "/customers".to_string()
}
fn default_items() -> String {
    "/items".to_string()
}
fn default_orders() -> String {
    "/orders".to_string()
}
fn default_auth() -> String {
    "/users".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            customers: default_customers(),
            items: default_items(),
            orders: default_orders(),
            auth: default_auth(),
        }
    }
}

/// `collection/id`, tolerating a trailing slash on the collection.
pub(crate) fn member_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), id)
}

impl Endpoints {
    pub fn customer(&self, id: &str) -> String {
        member_path(&self.customers, id)
    }

    pub fn item(&self, id: &str) -> String {
        member_path(&self.items, id)
    }

    pub fn order(&self, id: &str) -> String {
        member_path(&self.orders, id)
    }

    pub fn login(&self) -> String {
        member_path(&self.auth, "login")
    }

    pub fn register(&self) -> String {
        member_path(&self.auth, "register")
    }

    fn all(&self) -> [(&'static str, &str); 4] {
        [
            ("customers", self.customers.as_str()),
            ("items", self.items.as_str()),
            ("orders", self.orders.as_str()),
            ("auth", self.auth.as_str()),
        ]
    }
}

// =============================================================================
// Session Settings
// =============================================================================

/// Where the login marker is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Storage key the marker is kept under.
    #[serde(default = "default_session_key")]
    pub key: String,

    /// Session file; the platform data directory when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_session_key() -> String {
    "user".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            key: default_session_key(),
            file: None,
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// Presentation settings for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency symbol prefixed to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "LKR".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency: default_currency(),
        }
    }
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub endpoints: Endpoints,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (dashboard.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let base = &self.api.base_url;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "API base URL must start with http:// or https://, got: {}",
                base
            )));
        }
        Url::parse(base)?;

        if self.api.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        for (name, path) in self.endpoints.all() {
            if !path.starts_with('/') {
                return Err(ClientError::InvalidConfig(format!(
                    "endpoint '{}' must start with '/', got: {}",
                    name, path
                )));
            }
        }

        if self.session.key.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "session key must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from a variable lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("BARISTA_API_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = url;
        }

        if let Some(path) = lookup("BARISTA_AUTH_PATH") {
            debug!(path = %path, "Overriding auth path from environment");
            self.endpoints.auth = path;
        }

        if let Some(file) = lookup("BARISTA_SESSION_FILE") {
            self.session.file = Some(PathBuf::from(file));
        }

        if let Some(currency) = lookup("BARISTA_CURRENCY") {
            self.display.currency = currency;
        }

        if let Some(timeout) = lookup("BARISTA_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(timeout = %timeout, "Ignoring non-numeric timeout in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "barista", "shop")
            .map(|dirs| dirs.config_dir().join("dashboard.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// The session file, falling back to the platform data directory.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session.file.clone().or_else(|| {
            directories::ProjectDirs::from("com", "barista", "shop")
                .map(|dirs| dirs.data_dir().join("session.json"))
        })
    }

    pub fn currency(&self) -> &str {
        &self.display.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.session.key, "user");
        assert_eq!(config.currency(), "LKR");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_paths() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.customer("c-1"), "/customers/c-1");
        assert_eq!(endpoints.order("o-9"), "/orders/o-9");
        assert_eq!(endpoints.login(), "/users/login");
        assert_eq!(endpoints.register(), "/users/register");

        let legacy = Endpoints {
            auth: "/user/".to_string(),
            ..Endpoints::default()
        };
        assert_eq!(legacy.login(), "/user/login");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        config.api.base_url = "ws://localhost:3000".to_string();
        assert!(config.validate().unwrap_err().is_config_error());

        config.api.base_url = "https://api.example.com".to_string();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.api.timeout_secs = 5;
        config.endpoints.items = "items".to_string();
        assert!(config.validate().is_err());

        config.endpoints.items = "/items".to_string();
        config.session.key = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BARISTA_API_URL", "http://10.0.0.5:3000"),
            ("BARISTA_AUTH_PATH", "/user"),
            ("BARISTA_SESSION_FILE", "/tmp/barista-session.json"),
            ("BARISTA_TIMEOUT_SECS", "nope"),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.5:3000");
        assert_eq!(config.endpoints.login(), "/user/login");
        assert_eq!(
            config.session_path(),
            Some(PathBuf::from("/tmp/barista-session.json"))
        );
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://cafe.local:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://cafe.local:8080");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dashboard.toml");

        let mut config = ClientConfig::default();
        config.display.currency = "USD".to_string();
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[api]"));
        assert!(contents.contains("[endpoints]"));

        let parsed: ClientConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.currency(), "USD");
    }
}
