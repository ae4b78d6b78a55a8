use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_contact_table::Contact, m20251020_000002_create_group_table::Group,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactGroup::Table)
                    .if_not_exists()
                    .col(integer(ContactGroup::ContactId))
                    .col(integer(ContactGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(ContactGroup::ContactId)
                            .col(ContactGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_group_contact_id")
                            .from(ContactGroup::Table, ContactGroup::ContactId)
                            .to(Contact::Table, Contact::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_group_group_id")
                            .from(ContactGroup::Table, ContactGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactGroup {
    Table,
    ContactId,
    GroupId,
}
