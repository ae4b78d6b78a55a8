//! Contact domain models and parameters.
//!
//! Provides the domain model for contacts together with the parameter type built from an
//! incoming `ContactDto`. A contact's group names are never stored on the contact row;
//! they are derived from its group associations whenever the contact is read.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    model::contact::ContactDto,
    server::{error::AppError, model::require_length},
};

static PHONE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9\s\-\(\)]+$").expect("phone number pattern is a valid regex")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Contact with the names of the groups it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Surrogate key, never exposed through the API.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    /// Names of associated groups, ordered by name.
    pub group_names: Vec<String>,
}

impl Contact {
    /// Converts a contact entity and its related groups to a domain model.
    ///
    /// Called at the repository boundary so entity models never leak into the service
    /// or controller layers.
    ///
    /// # Arguments
    /// - `entity` - Contact row
    /// - `groups` - Groups associated with the contact
    ///
    /// # Returns
    /// - `Contact` - Domain model with group names sorted alphabetically
    pub fn from_entity(
        entity: entity::contact::Model,
        groups: Vec<entity::group::Model>,
    ) -> Self {
        let mut group_names: Vec<String> = groups.into_iter().map(|g| g.name).collect();
        group_names.sort();

        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone_number: entity.phone_number,
            email: entity.email,
            group_names,
        }
    }

    /// Converts the contact to a DTO for API responses.
    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            email: self.email,
            group_names: self.group_names,
        }
    }

    /// Display name used in service messages, e.g. `John Doe`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Parameters for adding, updating or deleting a contact.
///
/// `first_name` and `last_name` identify the contact. On update, the remaining fields
/// replace the stored values and `group_names` replaces the contact's group associations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactParams {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    /// Names of the groups the contact should belong to.
    pub group_names: Vec<String>,
}

impl ContactParams {
    /// Converts a request DTO into contact parameters.
    pub fn from_dto(dto: ContactDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            email: dto.email,
            group_names: dto.group_names,
        }
    }

    /// Validates the request shape of a contact, stopping at the first violation.
    ///
    /// Rules, in order:
    /// - first and last name: required, 2 to 50 characters
    /// - phone number: required, 10 to 15 characters, digits, whitespace, `-`, `(` and `)`
    /// - email: required, at most 254 characters, `local@domain.tld` shape
    ///
    /// # Returns
    /// - `Ok(())` - The contact is well formed
    /// - `Err(AppError::InvalidArgument)` - With the message of the first violated rule
    pub fn validate(&self) -> Result<(), AppError> {
        require_length(
            &self.first_name,
            2,
            50,
            "First Name is required.",
            "First Name must be between 2 and 50 characters.",
        )?;
        require_length(
            &self.last_name,
            2,
            50,
            "Last Name is required.",
            "Last Name must be between 2 and 50 characters.",
        )?;

        require_length(
            &self.phone_number,
            10,
            15,
            "Phone Number is required.",
            "Phone Number must be between 10 and 15 characters.",
        )?;
        if !PHONE_NUMBER_PATTERN.is_match(&self.phone_number) {
            return Err(AppError::InvalidArgument(
                "Phone Number can only contain digits, spaces, dashes, and parentheses."
                    .to_string(),
            ));
        }

        require_length(
            &self.email,
            0,
            254,
            "Email is required.",
            "Email must not exceed 254 characters.",
        )?;
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(AppError::InvalidArgument(
                "Email is not in a valid format.".to_string(),
            ));
        }

        Ok(())
    }

    /// Display name used in service messages, e.g. `John Doe`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
