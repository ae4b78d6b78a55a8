//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON wire format of the API. They carry no behaviour beyond
//! serialization; conversion to and from server-side domain models lives in
//! `server::model`.

pub mod api;
pub mod contact;
pub mod group;
