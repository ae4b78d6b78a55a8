//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// natural key to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Spells a counter value with letters only.
///
/// Contact names may only contain letters and spaces, so digits are mapped onto
/// `a..=j` (`0 -> a`, `1 -> b`, ...). Distinct values yield distinct strings.
///
/// # Arguments
/// - `id` - Counter value to spell
///
/// # Returns
/// - `String` - Lowercase letters encoding `id`
pub fn alpha_suffix(id: u64) -> String {
    id.to_string()
        .bytes()
        .map(|digit| char::from(b'a' + (digit - b'0')))
        .collect()
}

/// Creates a group and a contact that belongs to it.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((group, contact))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_contact_in_group(
    db: &DatabaseConnection,
) -> Result<(entity::group::Model, entity::contact::Model), DbErr> {
    let group = crate::factory::group::create_group(db).await?;
    let contact = crate::factory::contact::create_contact(db).await?;
    crate::factory::contact_group::add_to_group(db, contact.id, group.id).await?;

    Ok((group, contact))
}
