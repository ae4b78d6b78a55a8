//! Field rules enforced by the service layer before any lookup or write.
//!
//! Each function checks its rules in a fixed order and returns the first violation as
//! `AppError::InvalidArgument`. Letters and digits follow Unicode classification and
//! lengths count characters, not bytes.

use crate::server::{error::AppError, model::contact::ContactParams};

fn invalid(message: &str) -> AppError {
    AppError::InvalidArgument(message.to_string())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates every field of a contact.
///
/// # Arguments
/// - `contact` - Contact to check; `group_names` is not inspected
///
/// # Returns
/// - `Ok(())` - All field rules hold
/// - `Err(AppError::InvalidArgument)` - With the message of the first violated rule
pub fn validate_contact(contact: &ContactParams) -> Result<(), AppError> {
    validate_contact_names(&contact.first_name, &contact.last_name)?;
    validate_phone_number(&contact.phone_number)?;
    validate_email(&contact.email)?;

    Ok(())
}

fn validate_contact_names(first_name: &str, last_name: &str) -> Result<(), AppError> {
    if is_blank(first_name) || is_blank(last_name) {
        return Err(invalid(
            "Contact FirstName or Lastname cannot be null or empty.",
        ));
    }

    if first_name == "string" || last_name == "string" {
        return Err(invalid("Enter a valid Contact details."));
    }

    let first_len = first_name.chars().count();
    let last_len = last_name.chars().count();

    if first_len < 2 || last_len < 2 {
        return Err(invalid(
            "Contact FirstName and Lastname must be at least 2 characters long.",
        ));
    }

    if first_len > 50 || last_len > 50 {
        return Err(invalid(
            "Contact FirstName and Lastname must not exceed 50 characters.",
        ));
    }

    let is_name_char = |c: char| c.is_alphabetic() || c == ' ';
    if !first_name.chars().all(is_name_char) || !last_name.chars().all(is_name_char) {
        return Err(invalid(
            "Contact FirstName and Lastname can only contain letters and spaces.",
        ));
    }

    Ok(())
}

fn validate_phone_number(phone_number: &str) -> Result<(), AppError> {
    if is_blank(phone_number) {
        return Err(invalid("Contact PhoneNumber cannot be null or empty."));
    }

    let len = phone_number.chars().count();

    if len < 10 {
        return Err(invalid(
            "Contact PhoneNumber must be at least 10 characters long.",
        ));
    }

    if len > 15 {
        return Err(invalid("Contact PhoneNumber must not exceed 15 characters."));
    }

    if !phone_number.chars().all(char::is_numeric) {
        return Err(invalid("Contact PhoneNumber must contain only digits."));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if is_blank(email) {
        return Err(invalid("Contact Email cannot be null or empty."));
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(invalid("Contact Email must be a valid email address."));
    }

    if !email
        .chars()
        .all(|c| c.is_alphanumeric() || c == '@' || c == '.' || c == '_')
    {
        return Err(invalid(
            "Contact Email can only contain letters, digits, '@', '.', and '_'.",
        ));
    }

    let len = email.chars().count();

    if len < 5 {
        return Err(invalid("Contact Email must be at least 5 characters long."));
    }

    if len > 100 {
        return Err(invalid("Contact Email must not exceed 100 characters."));
    }

    Ok(())
}

/// Validates the shape of a group name.
///
/// # Returns
/// - `Ok(())` - Name is non-blank, not the placeholder `"string"`, made of letters,
///   digits and spaces, and 2 to 50 characters long
/// - `Err(AppError::InvalidArgument)` - With the message of the first violated rule
pub fn validate_group_name(name: &str) -> Result<(), AppError> {
    if is_blank(name) {
        return Err(invalid("Group name cannot be null or empty."));
    }

    if name == "string" {
        return Err(invalid("Enter a new valid Group name."));
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(invalid(
            "Group name can only contain letters, digits, and spaces.",
        ));
    }

    let len = name.chars().count();

    if len < 2 {
        return Err(invalid("Group name must be at least 2 characters long."));
    }

    if len > 50 {
        return Err(invalid("Group name must not exceed 50 characters."));
    }

    Ok(())
}
