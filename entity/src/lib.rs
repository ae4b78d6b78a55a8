//! SeaORM entities for the address book schema.

pub mod prelude;

pub mod contact;
pub mod contact_group;
pub mod group;
