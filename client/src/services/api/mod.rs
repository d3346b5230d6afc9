//! # Platform API Client Module
//!
//! HTTP client for the SurroMatch REST API. Every call goes through
//! [`ApiClient::request`], which attaches the session token and normalizes
//! failures into [`ApiError`](crate::core::error::ApiError).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient and outcome mapping
//! ├── request.rs       - ApiRequest descriptor and HTTP methods
//! ├── transport.rs     - Transport trait and the reqwest implementation
//! ├── auth.rs          - Login, registration, OTP, current user, logout
//! ├── kyc.rs           - Verification status and document upload
//! ├── referrals.rs     - Referral code
//! ├── agencies.rs      - Agency roster
//! ├── wallet.rs        - Balance and transaction history
//! ├── connections.rs   - Connections list
//! ├── journey.rs       - Role journey steps
//! └── notifications.rs - Notification list and read receipts
//! ```
//!
//! Endpoint modules are free functions over `&ApiClient<T>`; callers that
//! want a trait object use [`crate::core::service::PlatformApi`].

pub mod agencies;
pub mod auth;
pub mod client;
pub mod connections;
pub mod journey;
pub mod kyc;
pub mod notifications;
pub mod referrals;
pub mod request;
pub mod transport;
pub mod wallet;

pub use client::ApiClient;
pub use request::{ApiRequest, Method};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse};
