pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_contact_table;
mod m20251020_000002_create_group_table;
mod m20251020_000003_create_contact_group_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_contact_table::Migration),
            Box::new(m20251020_000002_create_group_table::Migration),
            Box::new(m20251020_000003_create_contact_group_table::Migration),
        ]
    }
}
