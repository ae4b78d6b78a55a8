//! Group domain models and parameters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    model::group::{CreateGroupDto, GroupDto, GroupMemberDto, UpdateGroupDto},
    server::{error::AppError, model::require_length},
};

static GROUP_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("group name pattern is a valid regex"));

/// Contact listed as a member of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub first_name: String,
    pub last_name: String,
}

/// Group with its member contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Surrogate key, never exposed through the API.
    pub id: i32,
    pub name: String,
    /// Members ordered by first name.
    pub members: Vec<GroupMember>,
}

impl Group {
    /// Converts a group entity and its member contacts to a domain model.
    ///
    /// # Arguments
    /// - `entity` - Group row
    /// - `contacts` - Contacts associated with the group
    ///
    /// # Returns
    /// - `Group` - Domain model with members ordered by first then last name
    pub fn from_entity(entity: entity::group::Model, contacts: Vec<entity::contact::Model>) -> Self {
        let mut members: Vec<GroupMember> = contacts
            .into_iter()
            .map(|c| GroupMember {
                first_name: c.first_name,
                last_name: c.last_name,
            })
            .collect();
        members.sort_by(|a, b| {
            a.first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name))
        });

        Self {
            id: entity.id,
            name: entity.name,
            members,
        }
    }

    /// Converts the group to a DTO for API responses.
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            name: self.name,
            contacts: self
                .members
                .into_iter()
                .map(|m| GroupMemberDto {
                    first_name: m.first_name,
                    last_name: m.last_name,
                })
                .collect(),
        }
    }
}

/// Validates the request shape of a group name.
///
/// # Returns
/// - `Ok(())` - Name is present, 2 to 50 characters, ASCII letters, digits and spaces only
/// - `Err(AppError::InvalidArgument)` - With the message of the first violated rule
fn validate_name(name: &str) -> Result<(), AppError> {
    require_length(
        name,
        2,
        50,
        "Group Name is required.",
        "Group Name must be between 2 and 50 characters.",
    )?;

    if !GROUP_NAME_PATTERN.is_match(name) {
        return Err(AppError::InvalidArgument(
            "Group Name can only contain letters, digits, and spaces.".to_string(),
        ));
    }

    Ok(())
}

/// Parameters for creating a new group.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGroupParams {
    pub name: String,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self { name: dto.name }
    }

    /// Validates the request shape of the new group.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)
    }
}

/// Parameters for renaming an existing group.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGroupParams {
    /// Name the group is currently stored under.
    pub current_name: String,
    /// Name the group should have after the update.
    pub name: String,
}

impl UpdateGroupParams {
    /// Builds rename parameters from the path's current name and the request body.
    pub fn from_dto(current_name: String, dto: UpdateGroupDto) -> Self {
        Self {
            current_name,
            name: dto.name,
        }
    }

    /// Validates the request shape of the new name.
    ///
    /// The current name comes from the path and is checked by the service layer.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)
    }
}
