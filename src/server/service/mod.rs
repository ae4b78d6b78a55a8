//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Enforcing field rules before any lookup or write
//! - **Invariants**: Rejecting duplicate names on create and unknown names on update or delete
//! - **Reconciliation**: Resolving a contact's group names into group associations
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod contact;
pub mod group;
pub mod validation;
