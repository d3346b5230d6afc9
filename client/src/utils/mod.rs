//! # Utility Functions
//!
//! - **[`validation`]**: Form input validation (email, names, password strength)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Display helpers (names, masked emails, amounts)
//! - [`crate::core`]: Error types

pub mod validation;
