//! # Client Configuration
//!
//! Settings loaded from environment variables. Loading and validation are
//! separate steps so the host can report every problem at startup:
//!
//! ```rust,no_run
//! use surromatch_client::config::Settings;
//!
//! # fn main() -> Result<(), surromatch_client::core::error::ConfigError> {
//! let settings = Settings::from_env()?;
//! settings.validate()?;
//! # Ok(())
//! # }
//! ```
//!
//! | variable                       | default                        |
//! |--------------------------------|--------------------------------|
//! | `SURROMATCH_PLATFORM`          | `mobile`                       |
//! | `SURROMATCH_API_ORIGIN`        | preset for the platform        |
//! | `SURROMATCH_API_BASE_PATH`     | `/api`                         |
//! | `SURROMATCH_HTTP_TIMEOUT_SECS` | none                           |
//! | `SURROMATCH_LOG_DIR`           | `logs`                         |
//! | `RUST_LOG`                     | `surromatch_client=info,warn`  |

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::ConfigError;
use crate::logging::LogConfig;
use crate::services::endpoint::EndpointConfig;

pub const PLATFORM_VAR: &str = "SURROMATCH_PLATFORM";
pub const ORIGIN_VAR: &str = "SURROMATCH_API_ORIGIN";
pub const BASE_PATH_VAR: &str = "SURROMATCH_API_BASE_PATH";
pub const TIMEOUT_VAR: &str = "SURROMATCH_HTTP_TIMEOUT_SECS";

/// Accepted range for the transport timeout, in seconds.
pub const TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 1..=300;

/// Where the host runs. Selects the default endpoint preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Browser build served next to a local API.
    Web,
    /// Native mobile build talking to the hosted API.
    #[default]
    Mobile,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Platform::Web),
            "mobile" | "ios" | "android" => Ok(Platform::Mobile),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub platform: Platform,

    /// Initial endpoint; the store it seeds can still be switched at runtime.
    pub endpoint: EndpointConfig,

    /// Transport timeout. `None` leaves requests unbounded.
    pub http_timeout: Option<Duration>,

    /// Passed to [`crate::logging::init`] by the binary.
    pub log: LogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            endpoint: EndpointConfig::for_platform(Platform::default()),
            http_timeout: None,
            log: LogConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let platform = match var(PLATFORM_VAR) {
            Some(value) => value.parse()?,
            None => Platform::default(),
        };

        let preset = EndpointConfig::for_platform(platform);
        let endpoint = match (var(ORIGIN_VAR), var(BASE_PATH_VAR)) {
            (None, None) => preset,
            (origin, base_path) => EndpointConfig::new(
                origin.as_deref().unwrap_or(preset.origin()),
                base_path.as_deref().unwrap_or(preset.base_path()),
            )?,
        };

        let http_timeout = var(TIMEOUT_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| ConfigError::InvalidValue {
                        name: TIMEOUT_VAR,
                        reason: format!("must be a whole number of seconds: {}", e),
                    })
            })
            .transpose()?;

        Ok(Self {
            platform,
            endpoint,
            http_timeout,
            log: LogConfig::from_lookup(&lookup),
        })
    }

    /// Validate values against the accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(timeout) = self.http_timeout {
            if !TIMEOUT_RANGE_SECS.contains(&timeout.as_secs()) {
                return Err(ConfigError::InvalidValue {
                    name: TIMEOUT_VAR,
                    reason: format!(
                        "must be between {} and {} seconds",
                        TIMEOUT_RANGE_SECS.start(),
                        TIMEOUT_RANGE_SECS.end()
                    ),
                });
            }
        }
        Ok(())
    }
}
