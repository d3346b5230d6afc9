//! # Endpoint Configuration Store
//!
//! Single source of truth for where the API lives. The store is injected into
//! [`ApiClient`](crate::services::api::ApiClient) as an `Arc<EndpointStore>`;
//! every request reads the configuration when it is built, so a change takes
//! effect for the next request and never retargets one already in flight.
//!
//! ```rust
//! use surromatch_client::services::endpoint::EndpointStore;
//!
//! let store = EndpointStore::production();
//! store.use_localhost();
//! assert_eq!(store.base_url(), "http://localhost:5000/api");
//! ```

use parking_lot::RwLock;
use reqwest::Url;

use crate::config::Platform;
use crate::core::error::ConfigError;

pub const DEFAULT_BASE_PATH: &str = "/api";

pub const PRODUCTION_ORIGIN: &str = "https://api.surromatch.com";
pub const LOCALHOST_ORIGIN: &str = "http://localhost:5000";
pub const MOBILE_DEV_ORIGIN: &str = "https://api.surromatch.com";

/// Validated `(origin, base_path)` pair.
///
/// `origin` never ends with `/`; `base_path` always starts with `/` and only
/// ends with one when it is the root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    origin: String,
    base_path: String,
}

impl EndpointConfig {
    pub fn new(origin: &str, base_path: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            origin: normalize_origin(origin)?,
            base_path: normalize_base_path(base_path)?,
        })
    }

    pub fn production() -> Self {
        Self::preset(PRODUCTION_ORIGIN)
    }

    pub fn localhost() -> Self {
        Self::preset(LOCALHOST_ORIGIN)
    }

    pub fn mobile_dev() -> Self {
        Self::preset(MOBILE_DEV_ORIGIN)
    }

    /// Preset chosen from the host-supplied platform.
    ///
    /// Web selects the local preset, everything else production.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Web => Self::localhost(),
            Platform::Mobile => Self::production(),
        }
    }

    fn preset(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.origin, self.base_path)
    }

    /// Absolute URL for an API route, with exactly one `/` at the join.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url();
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::production()
    }
}

fn normalize_origin(origin: &str) -> Result<String, ConfigError> {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyOrigin);
    }

    let invalid = |reason: &str| ConfigError::InvalidOrigin {
        origin: origin.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("origin must not carry a path, query or fragment"));
    }

    Ok(trimmed.to_string())
}

fn normalize_base_path(base_path: &str) -> Result<String, ConfigError> {
    let trimmed = base_path.trim();
    if !trimmed.starts_with('/') || trimmed.contains(['?', '#']) {
        return Err(ConfigError::InvalidBasePath(base_path.to_string()));
    }
    let without_trailing = trimmed.trim_end_matches('/');
    if without_trailing.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(without_trailing.to_string())
    }
}

/// Shared, mutable endpoint configuration. Last write wins; no history.
#[derive(Debug, Default)]
pub struct EndpointStore {
    current: RwLock<EndpointConfig>,
}

impl EndpointStore {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            current: RwLock::new(config),
        }
    }

    pub fn production() -> Self {
        Self::new(EndpointConfig::production())
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::new(EndpointConfig::for_platform(platform))
    }

    /// Validate and store a new configuration. On error the previous
    /// configuration stays active.
    pub fn set_config(&self, origin: &str, base_path: &str) -> Result<(), ConfigError> {
        let config = EndpointConfig::new(origin, base_path)?;
        self.replace(config);
        Ok(())
    }

    /// `set_config(origin, "/api")`.
    pub fn set_origin(&self, origin: &str) -> Result<(), ConfigError> {
        self.set_config(origin, DEFAULT_BASE_PATH)
    }

    pub fn use_localhost(&self) {
        self.replace(EndpointConfig::localhost());
    }

    pub fn use_production(&self) {
        self.replace(EndpointConfig::production());
    }

    pub fn use_mobile_dev(&self) {
        self.replace(EndpointConfig::mobile_dev());
    }

    pub fn apply_platform(&self, platform: Platform) {
        self.replace(EndpointConfig::for_platform(platform));
    }

    pub fn replace(&self, config: EndpointConfig) {
        tracing::debug!(base_url = %config.base_url(), "API endpoint configured");
        *self.current.write() = config;
    }

    pub fn current(&self) -> EndpointConfig {
        self.current.read().clone()
    }

    pub fn base_url(&self) -> String {
        self.current.read().base_url()
    }

    pub fn url_for(&self, path: &str) -> String {
        self.current.read().url_for(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_origin_plus_base_path() {
        let cases = [
            ("https://api.example.com", "/api", "https://api.example.com/api"),
            ("https://api.example.com/", "/api", "https://api.example.com/api"),
            ("http://10.0.2.2:5000", "/api/v2/", "http://10.0.2.2:5000/api/v2"),
            ("http://localhost:5000", "/", "http://localhost:5000/"),
        ];
        for (origin, base_path, expected) in cases {
            let config = EndpointConfig::new(origin, base_path).unwrap();
            assert_eq!(config.base_url(), expected);
            assert!(!config.base_url()["https://".len()..].contains("//"));
        }
    }

    #[test]
    fn test_url_for_joins_with_single_slash() {
        let config = EndpointConfig::new("http://localhost:5000", "/api").unwrap();
        assert_eq!(config.url_for("/wallet/balance"), "http://localhost:5000/api/wallet/balance");
        assert_eq!(config.url_for("wallet/balance"), "http://localhost:5000/api/wallet/balance");

        let root = EndpointConfig::new("http://localhost:5000", "/").unwrap();
        assert_eq!(root.url_for("/auth/me"), "http://localhost:5000/auth/me");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(EndpointConfig::new("", "/api"), Err(ConfigError::EmptyOrigin));
        assert_eq!(EndpointConfig::new("///", "/api"), Err(ConfigError::EmptyOrigin));
        assert!(matches!(
            EndpointConfig::new("ftp://files.example.com", "/api"),
            Err(ConfigError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            EndpointConfig::new("https://api.example.com/api", "/api"),
            Err(ConfigError::InvalidOrigin { .. })
        ));
        assert_eq!(
            EndpointConfig::new("https://api.example.com", "api"),
            Err(ConfigError::InvalidBasePath("api".to_string()))
        );
    }

    #[test]
    fn test_failed_set_keeps_previous_config() {
        let store = EndpointStore::production();
        assert!(store.set_config("", "/api").is_err());
        assert_eq!(store.current(), EndpointConfig::production());
    }

    #[test]
    fn test_presets_last_write_wins() {
        let store = EndpointStore::default();
        store.use_production();
        store.use_localhost();
        assert_eq!(store.current(), EndpointConfig::localhost());
        assert_eq!(store.base_url(), "http://localhost:5000/api");

        store.use_mobile_dev();
        assert_eq!(store.current(), EndpointConfig::mobile_dev());
    }

    #[test]
    fn test_override_replaces_preset() {
        let store = EndpointStore::production();
        store.set_origin("http://192.168.1.20:5000/").unwrap();
        assert_eq!(store.base_url(), "http://192.168.1.20:5000/api");
        assert_eq!(store.current().origin(), "http://192.168.1.20:5000");
    }

    #[test]
    fn test_platform_selection() {
        assert_eq!(EndpointConfig::for_platform(Platform::Web), EndpointConfig::localhost());
        assert_eq!(EndpointConfig::for_platform(Platform::Mobile), EndpointConfig::production());

        let store = EndpointStore::for_platform(Platform::Mobile);
        store.apply_platform(Platform::Web);
        assert_eq!(store.base_url(), "http://localhost:5000/api");
    }
}
