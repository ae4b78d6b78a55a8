//! Database repository layer for contacts and groups.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! resource. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer. Writes spanning the
//! contact and join tables run inside a single transaction.

pub mod contact;
pub mod group;


/// Largest offset or limit the SQLite driver binds.
const MAX_BOUND: u64 = i64::MAX as u64;

/// Computes the offset and limit for a 1-based page.
///
/// Page sizes beyond the driver's range are clamped, which still takes every remaining row.
///
/// # Returns
/// - `Some((offset, limit))` - Window of rows to select
/// - `None` - The page starts past any row the database can hold
pub(crate) fn page_window(page_number: u64, page_size: u64) -> Option<(u64, u64)> {
    let offset = page_number
        .saturating_sub(1)
        .checked_mul(page_size)
        .filter(|offset| *offset <= MAX_BOUND)?;

    Some((offset, page_size.min(MAX_BOUND)))
}
