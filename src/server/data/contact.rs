use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::page_window,
    model::contact::{Contact, ContactParams},
};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of contacts ordered by first name, each with its groups.
    ///
    /// # Arguments
    /// - `page_number` - 1-based page number; callers guarantee it is at least 1
    /// - `page_size` - Number of contacts per page
    ///
    /// # Returns
    /// - `Ok(Vec<Contact>)` - Contacts on the requested page, empty past the last page
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Vec<Contact>, DbErr> {
        let Some((offset, limit)) = page_window(page_number, page_size) else {
            return Ok(Vec::new());
        };

        let contacts = entity::prelude::Contact::find()
            .order_by_asc(entity::contact::Column::FirstName)
            .order_by_asc(entity::contact::Column::LastName)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        let contact_ids: Vec<i32> = contacts.iter().map(|c| c.id).collect();
        let mut groups_by_contact = self.groups_by_contact(contact_ids).await?;

        Ok(contacts
            .into_iter()
            .map(|contact| {
                let groups = groups_by_contact.remove(&contact.id).unwrap_or_default();
                Contact::from_entity(contact, groups)
            })
            .collect())
    }

    /// Finds a contact by its exact first and last name, with its groups.
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Contact>, DbErr> {
        let Some(contact) = entity::prelude::Contact::find()
            .filter(entity::contact::Column::FirstName.eq(first_name))
            .filter(entity::contact::Column::LastName.eq(last_name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let groups = contact
            .find_related(entity::prelude::Group)
            .all(self.db)
            .await?;

        Ok(Some(Contact::from_entity(contact, groups)))
    }

    /// Creates a contact and its group memberships in a single transaction.
    ///
    /// # Arguments
    /// - `params` - Contact fields; `group_names` is ignored in favour of `group_ids`
    /// - `group_ids` - Ids of the groups the contact joins
    ///
    /// # Returns
    /// - `Ok(Contact)` - The stored contact with its groups
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, params: ContactParams, group_ids: &[i32]) -> Result<Contact, DbErr> {
        let txn = self.db.begin().await?;

        let contact = entity::contact::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            phone_number: ActiveValue::Set(params.phone_number),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_memberships(&txn, contact.id, group_ids).await?;

        txn.commit().await?;

        self.reload(contact).await
    }

    /// Overwrites a contact's phone number, email and group memberships atomically.
    ///
    /// The contact's names are its lookup key and are left untouched.
    ///
    /// # Arguments
    /// - `id` - Id of the contact to update
    /// - `params` - New phone number and email
    /// - `group_ids` - Complete set of groups the contact belongs to afterwards
    ///
    /// # Returns
    /// - `Ok(Contact)` - The updated contact with its groups
    /// - `Err(DbErr::RecordNotUpdated)` - No contact with that id
    /// - `Err(DbErr)` - Other database error; nothing is changed
    pub async fn update(
        &self,
        id: i32,
        params: ContactParams,
        group_ids: &[i32],
    ) -> Result<Contact, DbErr> {
        let txn = self.db.begin().await?;

        let contact = entity::contact::ActiveModel {
            id: ActiveValue::Unchanged(id),
            phone_number: ActiveValue::Set(params.phone_number),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        entity::prelude::ContactGroup::delete_many()
            .filter(entity::contact_group::Column::ContactId.eq(id))
            .exec(&txn)
            .await?;
        insert_memberships(&txn, id, group_ids).await?;

        txn.commit().await?;

        self.reload(contact).await
    }

    /// Deletes a contact and its group memberships.
    ///
    /// Groups the contact belonged to are not affected.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ContactGroup::delete_many()
            .filter(entity::contact_group::Column::ContactId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Contact::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Loads the groups of a freshly written contact.
    async fn reload(&self, contact: entity::contact::Model) -> Result<Contact, DbErr> {
        let groups = contact
            .find_related(entity::prelude::Group)
            .all(self.db)
            .await?;

        Ok(Contact::from_entity(contact, groups))
    }

    /// Fetches the groups of several contacts in one query, keyed by contact id.
    async fn groups_by_contact(
        &self,
        contact_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::group::Model>>, DbErr> {
        if contact_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::ContactGroup::find()
            .filter(entity::contact_group::Column::ContactId.is_in(contact_ids))
            .find_also_related(entity::prelude::Group)
            .all(self.db)
            .await?;

        let mut groups_by_contact: HashMap<i32, Vec<entity::group::Model>> = HashMap::new();
        for (membership, group) in memberships {
            if let Some(group) = group {
                groups_by_contact
                    .entry(membership.contact_id)
                    .or_default()
                    .push(group);
            }
        }

        Ok(groups_by_contact)
    }
}

/// Inserts one join row per group for the given contact.
async fn insert_memberships<C: ConnectionTrait>(
    conn: &C,
    contact_id: i32,
    group_ids: &[i32],
) -> Result<(), DbErr> {
    for group_id in group_ids {
        entity::contact_group::ActiveModel {
            contact_id: ActiveValue::Set(contact_id),
            group_id: ActiveValue::Set(*group_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
