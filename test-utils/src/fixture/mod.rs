//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions between entity models, domain models and DTOs.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let contact = fixture::contact::entity();
//! let family = fixture::group::entity_named(1, "Family");
//! ```

pub mod contact;
pub mod group;
