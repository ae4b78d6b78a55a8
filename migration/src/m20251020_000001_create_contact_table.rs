use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string(Contact::FirstName))
                    .col(string(Contact::LastName))
                    .col(string(Contact::PhoneNumber))
                    .col(string(Contact::Email))
                    .to_owned(),
            )
            .await?;

        // (first_name, last_name) is the natural key used for lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_first_name_last_name")
                    .table(Contact::Table)
                    .col(Contact::FirstName)
                    .col(Contact::LastName)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
}
