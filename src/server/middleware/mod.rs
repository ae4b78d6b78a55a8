//! Request middleware.
//!
//! - `auth` - Bearer token guard applied to every resource route

pub mod auth;
