//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the SurroMatch client layer and
//! the platform's REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Users, roles, login and registration
//!   - **[`dto::kyc`]**: Identity verification status and document uploads
//!   - **[`dto::agency`]**: Referral codes and agency rosters
//!   - **[`dto::wallet`]**: Balances and transactions
//!   - **[`dto::connections`]**: Matches between users
//!   - **[`dto::journey`]**: Role-specific onboarding/matching journey
//!   - **[`dto::notifications`]**: In-app notifications
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! The API speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`. Enumerations use the API's
//! SCREAMING_SNAKE_CASE values (`"SURROGATE"`, `"INTENDED_PARENT"`, ...).
//! Optional fields are omitted from JSON when `None`.
//!
//! ```rust
//! use shared::dto::auth::{Role, UserSummary};
//!
//! let user: UserSummary = serde_json::from_str(
//!     r#"{"id":"u1","email":"ana@example.com","role":"SURROGATE","firstName":"Ana","lastName":"Diaz"}"#,
//! ).unwrap();
//! assert_eq!(user.role, Role::Surrogate);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
