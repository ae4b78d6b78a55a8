//! HTTP request handlers.
//!
//! Handlers run the request-shape validation of their parameter types, call the service
//! layer and convert the returned domain models to DTOs. Errors propagate unchanged to
//! `AppError`'s response mapping.

pub mod contact;
pub mod group;

#[cfg(test)]
mod test;
