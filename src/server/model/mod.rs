//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types also carry the request-shape validation run by the controllers before
//! a request reaches the service layer.

pub mod contact;
pub mod group;

use crate::server::error::AppError;

/// Checks that a required text field is present and within a character-count range.
///
/// Whitespace-only values count as missing.
///
/// # Arguments
/// - `value` - Field value to check
/// - `min` / `max` - Inclusive bounds on the number of characters
/// - `required` - Message for a missing value
/// - `length` - Message for a value outside the bounds
///
/// # Returns
/// - `Ok(())` - Value is present and within bounds
/// - `Err(AppError::InvalidArgument)` - With the matching message
pub(crate) fn require_length(
    value: &str,
    min: usize,
    max: usize,
    required: &str,
    length: &str,
) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(required.to_string()));
    }

    let count = value.chars().count();
    if count < min || count > max {
        return Err(AppError::InvalidArgument(length.to_string()));
    }

    Ok(())
}
