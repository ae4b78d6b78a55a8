//! Contact factory for creating test contact entities.
//!
//! Default values satisfy every validation rule of the API, so a factory-created
//! contact can be fed back through the service layer unchanged.

use crate::factory::helpers::{alpha_suffix, next_id};
use crate::fixture::contact::{DEFAULT_EMAIL_DOMAIN, DEFAULT_PHONE_NUMBER};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contacts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::contact::ContactFactory;
///
/// let contact = ContactFactory::new(&db)
///     .first_name("John")
///     .last_name("Doe")
///     .build()
///     .await?;
/// ```
pub struct ContactFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    phone_number: String,
    email: String,
}

impl<'a> ContactFactory<'a> {
    /// Creates a new ContactFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Contact{suffix}"` where suffix spells an auto-incremented id
    /// - last_name: `"Tester"`
    /// - phone_number: `"0211234567"`
    /// - email: `"contact{suffix}@example.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ContactFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let suffix = alpha_suffix(next_id());
        Self {
            db,
            first_name: format!("Contact{}", suffix),
            last_name: "Tester".to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            email: format!("contact{}@{}", suffix, DEFAULT_EMAIL_DOMAIN),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the contact entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::contact::Model)` - Created contact entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a contact with default values.
///
/// Shorthand for `ContactFactory::new(db).build().await`.
pub async fn create_contact(db: &DatabaseConnection) -> Result<entity::contact::Model, DbErr> {
    ContactFactory::new(db).build().await
}
