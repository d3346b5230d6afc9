//! Validation of form input before it is submitted.
//!
//! Failures use the same shape as a server-side 422 (`VALIDATION` with
//! `{"field", "message"}` details) so forms render both the same way.

use serde_json::json;
use shared::RegisterRequest;

use crate::core::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `VALIDATION` error for `field`.
    pub fn into_result(self, field: &str) -> Result<(), ApiError> {
        match self.error {
            None => Ok(()),
            Some(message) => Err(ApiError::validation(message.clone())
                .with_details(json!({ "field": field, "message": message }))),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if local.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a first or last name
pub fn validate_name(name: &str) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::err("Name is required");
    }

    if name.chars().count() > 50 {
        return ValidationResult::err("Name must be 50 characters or fewer");
    }

    ValidationResult::ok()
}

/// Validate password strength
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_uppercase {
        return ValidationResult::err("Password must contain at least one uppercase letter");
    }

    if !has_lowercase {
        return ValidationResult::err("Password must contain at least one lowercase letter");
    }

    if !has_digit {
        return ValidationResult::err("Password must contain at least one number");
    }

    ValidationResult::ok()
}

/// First failing field of a registration form, in form order.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    validate_name(&request.first_name).into_result("firstName")?;
    validate_name(&request.last_name).into_result("lastName")?;
    validate_email(&request.email).into_result("email")?;
    validate_password(&request.password).into_result("password")
}
