use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::page_window,
    model::group::{CreateGroupParams, Group},
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of groups ordered by name, each with its member contacts.
    ///
    /// # Arguments
    /// - `page_number` - 1-based page number; callers guarantee it is at least 1
    /// - `page_size` - Number of groups per page
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - Groups on the requested page, empty past the last page
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(&self, page_number: u64, page_size: u64) -> Result<Vec<Group>, DbErr> {
        let Some((offset, limit)) = page_window(page_number, page_size) else {
            return Ok(Vec::new());
        };

        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Name)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let mut contacts_by_group = self.contacts_by_group(group_ids).await?;

        Ok(groups
            .into_iter()
            .map(|group| {
                let contacts = contacts_by_group.remove(&group.id).unwrap_or_default();
                Group::from_entity(group, contacts)
            })
            .collect())
    }

    /// Finds a group by its exact name, with its member contacts.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.reload(group).await.map(Some)
    }

    /// Looks up several groups by name in one query.
    ///
    /// # Arguments
    /// - `names` - Group names to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<String, i32>)` - Id of every group found, keyed by name; names with no
    ///   matching group are absent
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_names(&self, names: &[String]) -> Result<HashMap<String, i32>, DbErr> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let groups = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.is_in(names.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(groups.into_iter().map(|g| (g.name, g.id)).collect())
    }

    /// Creates a group with no members.
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let group = entity::group::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(group, Vec::new()))
    }

    /// Renames a group in place, keeping its members.
    ///
    /// # Returns
    /// - `Ok(Group)` - The renamed group with its members
    /// - `Err(DbErr)` - Database error, including a unique violation if `name` is taken
    pub async fn update(&self, id: i32, name: String) -> Result<Group, DbErr> {
        let group = entity::group::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
        }
        .update(self.db)
        .await?;

        self.reload(group).await
    }

    /// Deletes a group and its memberships.
    ///
    /// Contacts that belonged to the group are not affected.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ContactGroup::delete_many()
            .filter(entity::contact_group::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Group::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn reload(&self, group: entity::group::Model) -> Result<Group, DbErr> {
        let contacts = group
            .find_related(entity::prelude::Contact)
            .all(self.db)
            .await?;

        Ok(Group::from_entity(group, contacts))
    }

    /// Fetches the members of several groups in one query, keyed by group id.
    async fn contacts_by_group(
        &self,
        group_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::contact::Model>>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::ContactGroup::find()
            .filter(entity::contact_group::Column::GroupId.is_in(group_ids))
            .find_also_related(entity::prelude::Contact)
            .all(self.db)
            .await?;

        let mut contacts_by_group: HashMap<i32, Vec<entity::contact::Model>> = HashMap::new();
        for (membership, contact) in memberships {
            if let Some(contact) = contact {
                contacts_by_group
                    .entry(membership.group_id)
                    .or_default()
                    .push(contact);
            }
        }

        Ok(contacts_by_group)
    }
}
