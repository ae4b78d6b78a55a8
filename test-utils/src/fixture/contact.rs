//! Contact fixtures for creating in-memory test data.

use entity::contact;

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "John";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "Doe";

/// Default test phone number (10 digits).
pub const DEFAULT_PHONE_NUMBER: &str = "0211234567";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "john@example.com";

/// Domain used for generated email addresses.
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Creates a contact entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"John"`
/// - last_name: `"Doe"`
/// - phone_number: `"0211234567"`
/// - email: `"john@example.com"`
///
/// # Returns
/// - `contact::Model` - In-memory contact entity
pub fn entity() -> contact::Model {
    contact::Model {
        id: 1,
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        phone_number: DEFAULT_PHONE_NUMBER.to_string(),
        email: DEFAULT_EMAIL.to_string(),
    }
}

/// Creates a contact entity model with the given id and names.
///
/// Remaining fields take their default values.
pub fn entity_named(id: i32, first_name: &str, last_name: &str) -> contact::Model {
    contact::Model {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..entity()
    }
}
