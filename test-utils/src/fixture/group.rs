//! Group fixtures for creating in-memory test data.

use entity::group;

/// Default test group name.
pub const DEFAULT_NAME: &str = "Family";

/// Creates a group entity model named `"Family"` with id `1`.
pub fn entity() -> group::Model {
    entity_named(1, DEFAULT_NAME)
}

/// Creates a group entity model with the given id and name.
pub fn entity_named(id: i32, name: &str) -> group::Model {
    group::Model {
        id,
        name: name.to_string(),
    }
}
