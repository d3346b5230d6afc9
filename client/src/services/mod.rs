//! # Services Module
//!
//! Everything that talks to, or configures talking to, the platform API.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── endpoint.rs  - Endpoint configuration store (origin + base path, presets)
//! ├── session.rs   - Session token holder (token + user snapshot)
//! └── api/         - Request client, transport seam, domain endpoints
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Host application                      │
//! │                                                          │
//! │  ┌────────────────┐  ┌────────────────┐                  │
//! │  │ EndpointStore  │  │ SessionStore   │                  │
//! │  │ (endpoint.rs)  │  │ (session.rs)   │                  │
//! │  └───────┬────────┘  └───────┬────────┘                  │
//! │          │ Arc               │ Arc                       │
//! │          ▼                   ▼                           │
//! │  ┌──────────────────────────────────────┐                │
//! │  │ ApiClient<T: Transport>  (api/)      │                │
//! │  └──────────────────┬───────────────────┘                │
//! └─────────────────────┼────────────────────────────────────┘
//!                       │ HTTP/JSON, Bearer token
//!                       ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  SurroMatch API  ({origin}{basePath})                    │
//! │                                                          │
//! │  /auth/*   /kyc/*   /referrals/*   /agencies/*           │
//! │  /wallet/* /connections  /journey  /notifications/*      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! Both stores hold their state behind a `parking_lot::RwLock` and are shared
//! through `Arc`. Locks are held only for the copy in or out and never across
//! an `.await`, so reads always see the latest completed write.
//!
//! ## Error Handling
//!
//! Configuration problems surface as [`ConfigError`](crate::core::error::ConfigError)
//! when the config is built. Request failures surface as
//! [`ApiError`](crate::core::error::ApiError) with one of six kinds; no
//! reqwest error type crosses this module's boundary.

pub mod api;
pub mod endpoint;
pub mod session;
