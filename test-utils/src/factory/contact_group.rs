//! Membership factory linking contacts to groups.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a contact to a group by inserting a join row.
///
/// # Arguments
/// - `db` - Database connection
/// - `contact_id` - Surrogate id of the contact
/// - `group_id` - Surrogate id of the group
///
/// # Returns
/// - `Ok(entity::contact_group::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate membership)
pub async fn add_to_group(
    db: &DatabaseConnection,
    contact_id: i32,
    group_id: i32,
) -> Result<entity::contact_group::Model, DbErr> {
    entity::contact_group::ActiveModel {
        contact_id: ActiveValue::Set(contact_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}
