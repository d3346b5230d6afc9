//! # SurroMatch Client - Library Root
//!
//! The API client layer for the SurroMatch platform, which matches
//! surrogates, egg/sperm donors, agencies and intended parents.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              surromatch_client (this crate)            │
//! ├────────────────────────────────────────────────────────┤
//! │  EndpointStore  - where requests go (origin, base path)│
//! │  SessionStore   - who is asking (token, user snapshot) │
//! │  ApiClient      - request, attach token, normalize     │
//! │  Transport      - reqwest in production, stubs in tests│
//! └────────────────────────────────────────────────────────┘
//!                           │
//!                           │ HTTPS, JSON, Bearer
//!                           ▼
//!                ┌─────────────────────┐
//!                │   SurroMatch API    │
//!                └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: `Settings` and `Platform`, loaded from environment variables
//! - **core**: `ApiError` / `ErrorKind`, `ConfigError`, the `PlatformApi` trait
//! - **logging**: `tracing` subscriber setup (console + rolling file)
//! - **services**: endpoint store, session store, request client and
//!   domain endpoints (auth, KYC, referrals, agencies, wallet, connections,
//!   journey, notifications)
//! - **utils**: form validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use surromatch_client::config::Settings;
//! use surromatch_client::services::api::{self, ApiClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let settings = Settings::from_env()?;
//! let client = ApiClient::from_settings(&settings)?;
//!
//! api::auth::login(&client, "ana@example.com", "SecurePass123").await?;
//! let balance = api::wallet::balance(&client).await?;
//! println!("{}", shared::format_amount(balance.available, &balance.currency));
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p surromatch-client
//! ```
//!
//! Unit tests run against a scripted in-memory transport; `tests/` drives the
//! reqwest transport against a local mock server.

pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{Platform, Settings};
pub use crate::core::{ApiError, ConfigError, ErrorKind, PlatformApi, Result};
pub use services::api::ApiClient;
pub use services::endpoint::{EndpointConfig, EndpointStore};
pub use services::session::{Session, SessionStore};
