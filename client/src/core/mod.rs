//! # Core Abstractions
//!
//! Error types and the service trait that the rest of the crate is built
//! around.
//!
//! ## Modules
//!
//! - **[`error`]**: Normalized request errors (`ApiError`, `ErrorKind`) and
//!   configuration errors (`ConfigError`)
//! - **[`service`]**: The `PlatformApi` trait for dependency injection
//!
//! ## Error Handling
//!
//! Every request outcome that is not a success is an [`ApiError`]:
//!
//! ```rust,no_run
//! use surromatch_client::core::error::{ApiError, ErrorKind};
//!
//! fn describe(err: &ApiError) -> String {
//!     match err.kind {
//!         ErrorKind::Auth => "Please log in again".to_string(),
//!         _ => err.user_message(),
//!     }
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use surromatch_client::config::Settings;
//! use surromatch_client::core::service::PlatformApi;
//! use surromatch_client::services::api::ApiClient;
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = Settings::from_env()?;
//! let api: Arc<dyn PlatformApi> = Arc::new(ApiClient::from_settings(&settings)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ConfigError, ErrorKind, Result};
pub use service::PlatformApi;
