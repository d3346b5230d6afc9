//! # Shared Utility Functions
//!
//! Display helpers used by screens and by the `surromatch` binary.
//!
//! - [`display_name`] - Full name of a user, falling back to the email
//! - [`mask_email`] - Hide most of the local part of an email address
//! - [`format_amount`] - Two-decimal money formatting with currency code
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_email;
//!
//! assert_eq!(mask_email("ana.diaz@example.com"), "a*******@example.com");
//! ```

use crate::dto::auth::UserSummary;

/// Name shown in headers and lists.
///
/// Uses first and last name when present, otherwise the email, otherwise the
/// user id.
///
/// # Examples
///
/// ```rust
/// use shared::dto::auth::{Role, UserSummary};
/// use shared::utils::display_name;
///
/// let mut user = UserSummary::new("u1", Role::Donor);
/// assert_eq!(display_name(&user), "u1");
/// user.first_name = Some("Ana".to_string());
/// assert_eq!(display_name(&user), "Ana");
/// ```
pub fn display_name(user: &UserSummary) -> String {
    let parts: Vec<&str> = [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if !parts.is_empty() {
        return parts.join(" ");
    }
    if !user.email.trim().is_empty() {
        return user.email.clone();
    }
    user.id.clone()
}

/// Mask an email for display, keeping the first character of the local part.
///
/// Strings without an `@` are returned unchanged.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let mut chars = local.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            format!("{}{}@{}", first, "*".repeat(chars.count()), domain)
        }
        _ => email.to_string(),
    }
}

/// Format an amount as `1,234.50 USD`.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{} {}", sign, grouped, fraction, currency)
}
