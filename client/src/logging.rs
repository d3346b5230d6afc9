//! # Logging
//!
//! `tracing` subscriber setup for hosts of the client: a console layer plus a
//! daily-rolling file under the log directory (`surromatch.log.YYYY-MM-DD`).
//!
//! ```rust,no_run
//! use surromatch_client::logging::{self, LogConfig};
//!
//! # fn main() -> Result<(), logging::LogInitError> {
//! let _guard = logging::init(&LogConfig::from_env())?;
//! tracing::info!("ready");
//! # Ok(())
//! # }
//! ```
//!
//! The returned guard flushes the file writer when dropped; keep it alive for
//! the life of the process.
//!
//! Filter directives come from `RUST_LOG` (default `surromatch_client=info,warn`).
//! The request client logs method, path, status and duration. Tokens and
//! passwords are never recorded.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "surromatch_client=info,warn";
pub const LOG_DIR_VAR: &str = "SURROMATCH_LOG_DIR";
pub const LOG_FILE_PREFIX: &str = "surromatch.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory for the rolling log files
    pub log_dir: PathBuf,
    /// Filter directives (e.g., "surromatch_client=debug,info")
    pub log_level: String,
    /// Also log to stderr
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            console: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            log_dir: var(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_level: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            console: true,
        }
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber.
///
/// Fails if the log directory cannot be created or a subscriber is already
/// set. An unparsable filter falls back to [`DEFAULT_LOG_LEVEL`].
pub fn init(config: &LogConfig) -> Result<WorkerGuard, LogInitError> {
    fs::create_dir_all(&config.log_dir).map_err(|source| LogInitError::CreateDir {
        path: config.log_dir.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let console_layer = config
        .console
        .then(|| fmt::layer().with_writer(io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LogInitError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    install_panic_hook();
    Ok(guard)
}

/// Route panics through tracing before the default hook runs, so they reach
/// the log file.
fn install_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Panic");
        default_panic(panic_info);
    }));
}
