use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{CreateGroupParams, Group, UpdateGroupParams},
    service::{contact::page_number_from, validation::validate_group_name},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of groups ordered by name, each with its members.
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - Groups on the requested page
    /// - `Err(AppError::InvalidArgument)` - `page_number` is less than 1
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page_number: i64,
        page_size: u64,
    ) -> Result<Vec<Group>, AppError> {
        let page = page_number_from(page_number).inspect_err(|_| {
            tracing::warn!("Page number less than 1: {}", page_number);
        })?;

        let repo = GroupRepository::new(self.db);

        Ok(repo.get_paginated(page, page_size).await?)
    }

    /// Gets a group by name.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group with its members
    /// - `Err(AppError::InvalidArgument)` - The name breaks a group name rule
    /// - `Err(AppError::NotFound)` - No group has that name
    pub async fn get_by_name(&self, name: &str) -> Result<Group, AppError> {
        self.find_valid(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group: {} not found.", name)))
    }

    /// Creates a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The stored group, without members
    /// - `Err(AppError::InvalidArgument)` - The name breaks a group name rule
    /// - `Err(AppError::Conflict)` - A group with that name exists
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        let already_exists = format!(
            "Group '{}' already exists. Enter new Group Name to add.",
            params.name
        );

        if self.find_valid(&params.name).await?.is_some() {
            return Err(AppError::Conflict(already_exists));
        }

        let repo = GroupRepository::new(self.db);

        repo.create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique_violation(e, already_exists))
    }

    /// Renames a group, keeping its members.
    ///
    /// # Returns
    /// - `Ok(Group)` - The renamed group
    /// - `Err(AppError::InvalidArgument)` - Either name breaks a group name rule
    /// - `Err(AppError::Conflict)` - No group has the current name, or the new name is
    ///   held by another group
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Group, AppError> {
        let existing = self.find_valid(&params.current_name).await?.ok_or_else(|| {
            AppError::Conflict(format!(
                "Group: {} does not exist. Enter existing Group Name to update.",
                params.current_name
            ))
        })?;

        validate_group_name(&params.name)?;

        let repo = GroupRepository::new(self.db);

        let taken = format!(
            "Group '{}' already exists. Enter new Group Name to update.",
            params.name
        );
        repo.update(existing.id, params.name)
            .await
            .map_err(|e| AppError::conflict_on_unique_violation(e, taken))
    }

    /// Deletes a group; its member contacts are kept.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group as it was before deletion, members included
    /// - `Err(AppError::InvalidArgument)` - The name breaks a group name rule
    /// - `Err(AppError::Conflict)` - No group has that name
    pub async fn delete(&self, name: &str) -> Result<Group, AppError> {
        let existing = self.find_valid(name).await?.ok_or_else(|| {
            AppError::Conflict(format!(
                "Group: {} does not exist. Enter existing Group Name to delete.",
                name
            ))
        })?;

        let repo = GroupRepository::new(self.db);
        repo.delete(existing.id).await?;

        Ok(existing)
    }

    /// Validates a group name and looks the group up.
    async fn find_valid(&self, name: &str) -> Result<Option<Group>, AppError> {
        validate_group_name(name)?;

        let repo = GroupRepository::new(self.db);

        Ok(repo.find_by_name(name).await?)
    }
}
