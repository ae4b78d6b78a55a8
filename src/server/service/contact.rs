use sea_orm::DatabaseConnection;

use crate::server::{
    data::{contact::ContactRepository, group::GroupRepository},
    error::AppError,
    model::contact::{Contact, ContactParams},
    service::validation::validate_contact,
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of contacts ordered by first name, each with its group names.
    ///
    /// # Arguments
    /// - `page_number` - 1-based page number
    /// - `page_size` - Number of contacts per page
    ///
    /// # Returns
    /// - `Ok(Vec<Contact>)` - Contacts on the requested page
    /// - `Err(AppError::InvalidArgument)` - `page_number` is less than 1
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page_number: i64,
        page_size: u64,
    ) -> Result<Vec<Contact>, AppError> {
        let page_number = page_number_from(page_number)?;

        let repo = ContactRepository::new(self.db);

        Ok(repo.get_paginated(page_number, page_size).await?)
    }

    /// Gets a contact by its first and last name.
    ///
    /// # Returns
    /// - `Ok(Contact)` - The contact with its group names
    /// - `Err(AppError::InvalidArgument)` - Either name is blank
    /// - `Err(AppError::NotFound)` - No contact has that name pair
    pub async fn get_by_name(&self, first_name: &str, last_name: &str) -> Result<Contact, AppError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Contact FirstName and LastName cannot be null or empty.".to_string(),
            ));
        }

        let repo = ContactRepository::new(self.db);

        repo.find_by_name(first_name, last_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Contact '{} {}' not found.", first_name, last_name))
            })
    }

    /// Creates a contact and joins it to the groups named in `group_names`.
    ///
    /// # Returns
    /// - `Ok(Contact)` - The stored contact
    /// - `Err(AppError::InvalidArgument)` - A field rule is violated
    /// - `Err(AppError::Conflict)` - The name pair is taken or a named group does not exist
    pub async fn create(&self, params: ContactParams) -> Result<Contact, AppError> {
        validate_contact(&params)?;

        let repo = ContactRepository::new(self.db);

        let already_exists = format!("Contact '{}' already exists.", params.full_name());
        if repo
            .find_by_name(&params.first_name, &params.last_name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(already_exists));
        }

        let group_ids = self.resolve_group_ids(&params.group_names).await?;

        repo.create(params, &group_ids)
            .await
            .map_err(|e| AppError::conflict_on_unique_violation(e, already_exists))
    }

    /// Overwrites a contact's phone number, email and group memberships.
    ///
    /// The contact is identified by its first and last name, which never change.
    ///
    /// # Returns
    /// - `Ok(Contact)` - The updated contact
    /// - `Err(AppError::InvalidArgument)` - A field rule is violated
    /// - `Err(AppError::Conflict)` - The contact does not exist or a named group does not exist
    pub async fn update(&self, params: ContactParams) -> Result<Contact, AppError> {
        let existing = self.require_existing(&params).await?;

        let group_ids = self.resolve_group_ids(&params.group_names).await?;

        let repo = ContactRepository::new(self.db);

        Ok(repo.update(existing.id, params, &group_ids).await?)
    }

    /// Deletes a contact identified by its first and last name.
    ///
    /// # Returns
    /// - `Ok(Contact)` - The contact as it was before deletion, group names included
    /// - `Err(AppError::InvalidArgument)` - A field rule is violated
    /// - `Err(AppError::Conflict)` - The contact does not exist
    pub async fn delete(&self, params: ContactParams) -> Result<Contact, AppError> {
        let existing = self.require_existing(&params).await?;

        let repo = ContactRepository::new(self.db);
        repo.delete(existing.id).await?;

        Ok(existing)
    }

    /// Validates the contact and fetches the stored record it refers to.
    async fn require_existing(&self, params: &ContactParams) -> Result<Contact, AppError> {
        validate_contact(params)?;

        let repo = ContactRepository::new(self.db);

        repo.find_by_name(&params.first_name, &params.last_name)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Contact '{}' does not exist.", params.full_name()))
            })
    }

    /// Resolves group names into group ids.
    ///
    /// Duplicate names are collapsed, keeping the first occurrence. The first name
    /// without a matching group fails the whole operation before anything is written.
    async fn resolve_group_ids(&self, group_names: &[String]) -> Result<Vec<i32>, AppError> {
        let mut distinct: Vec<String> = Vec::with_capacity(group_names.len());
        for name in group_names {
            if !distinct.contains(name) {
                distinct.push(name.clone());
            }
        }

        let repo = GroupRepository::new(self.db);
        let ids_by_name = repo.find_by_names(&distinct).await?;

        distinct
            .iter()
            .map(|name| {
                ids_by_name
                    .get(name)
                    .copied()
                    .ok_or_else(|| AppError::Conflict(format!("Group: {} does not exist.", name)))
            })
            .collect()
    }
}

/// Converts a requested page number into the 1-based offset used by repositories.
///
/// # Returns
/// - `Ok(u64)` - `page_number` when it is at least 1
/// - `Err(AppError::InvalidArgument)` - `page_number` is zero or negative
pub(super) fn page_number_from(page_number: i64) -> Result<u64, AppError> {
    u64::try_from(page_number)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| {
            AppError::InvalidArgument("Page number must be greater than zero.".to_string())
        })
}
