//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the platform API. Every route lives under
//! the configured base path (`/api` by default).
//!
//! ## Module Organization
//!
//! - [`auth`] - `/auth/*`: users, roles, login, registration, OTP
//! - [`kyc`] - `/kyc/*`: verification status and document upload
//! - [`agency`] - `/referrals/code`, `/agencies/{id}/roster`
//! - [`wallet`] - `/wallet/*`: balance and transactions
//! - [`connections`] - `/connections`
//! - [`journey`] - `/journey?role=<role>`
//! - [`notifications`] - `/notifications`, `/notifications/{id}/read`
//! - [`common`] - response envelopes shared by list endpoints
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "ana@example.com", "password": "S3cret!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "u1",
//!     "email": "ana@example.com",
//!     "role": "SURROGATE",
//!     "firstName": "Ana",
//!     "lastName": "Diaz"
//!   }
//! }
//! ```

pub mod agency;
pub mod auth;
pub mod common;
pub mod connections;
pub mod journey;
pub mod kyc;
pub mod notifications;
pub mod wallet;

pub use agency::*;
pub use auth::*;
pub use common::*;
pub use connections::*;
pub use journey::*;
pub use kyc::*;
pub use notifications::*;
pub use wallet::*;
