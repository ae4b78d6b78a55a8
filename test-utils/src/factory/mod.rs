//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Defaults are unique per call and pass the API's
//! validation rules.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let group = factory::create_group(db).await?;
//!     let contact = factory::contact::ContactFactory::new(db)
//!         .first_name("John")
//!         .last_name("Doe")
//!         .build()
//!         .await?;
//!     factory::add_to_group(db, contact.id, group.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `contact` - Create contact entities
//! - `group` - Create group entities
//! - `contact_group` - Link contacts to groups
//! - `helpers` - Unique value generation and entities with dependencies

pub mod contact;
pub mod contact_group;
pub mod group;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use contact::create_contact;
pub use contact_group::add_to_group;
pub use group::create_group;
